use fieldlock::{define, ContainerError};

fn main() -> Result<(), ContainerError> {
    // Define a request shape once, at runtime.
    let request = define("Request", "signature user_id")?;

    // Construct an instance; omitted fields default to absent.
    let r = request
        .construct()
        .set("signature", "test_signature".to_string())?
        .build();

    println!("signature: {:?}", r.get::<String>("signature")?);
    println!("user_id:   {:?}", r.get::<u64>("user_id")?);
    println!("display:   {}", r);

    // Declared fields can never be reassigned.
    match r.set("signature", "another_signature".to_string()) {
        Err(ContainerError::ImmutableProperty { name }) => {
            println!("write to '{}' rejected, as expected", name)
        }
        Ok(()) => println!("unexpected: write succeeded"),
        Err(e) => println!("unexpected error: {}", e),
    }

    // Undeclared fields don't exist on strict containers.
    match r.get::<String>("password") {
        Err(ContainerError::NoSuchAttribute { container, name }) => {
            println!("container '{}' has no '{}' field", container, name)
        }
        Ok(v) => println!("unexpected value: {:?}", v),
        Err(e) => println!("unexpected error: {}", e),
    }

    Ok(())
}
