use fieldlock::{define, ContainerError};
use std::sync::Arc;
use std::thread;

fn main() -> Result<(), ContainerError> {
    // A relaxed definition accepts fields beyond the declared ones.
    let event = define("Event", "kind timestamp")?.allow_others();

    let e = event
        .construct()
        .set("kind", "click".to_string())?
        .set("timestamp", 1_693_000_000u64)?
        .set("target", "save-button".to_string())? // not declared, accepted
        .build();

    // Extra fields stay mutable after construction.
    e.set("x", 120i32)?;
    e.set("y", 48i32)?;
    e.set("x", 125i32)?; // overwrite is fine for extras

    println!("{}", e);

    // Declared fields are still locked.
    match e.set("kind", "move".to_string()) {
        Err(ContainerError::ImmutableProperty { name }) => {
            println!("'{}' is immutable even in relaxed mode", name)
        }
        other => println!("unexpected: {:?}", other),
    }

    // The extra-field store is lock-guarded, so a shared instance can be
    // annotated from several threads.
    let shared = Arc::new(e);
    let mut handles = Vec::new();
    for i in 0..4 {
        let shared = Arc::clone(&shared);
        handles.push(thread::spawn(move || {
            shared.set(format!("annotation_{}", i), i).unwrap();
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    println!("{}", shared);
    Ok(())
}
