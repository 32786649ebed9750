use fieldlock::{define, ContainerError, ErrorKind};

#[test]
fn test_field_spec_forms_are_equivalent() -> Result<(), ContainerError> {
    let from_str = define("Container", "message user")?;
    let from_vec = define("Container", vec!["message", "user"])?;
    let from_arr = define("Container", ["message", "user"])?;
    let from_owned = define("Container", vec!["message".to_string(), "user".to_string()])?;

    assert_eq!(from_str.fields(), from_vec.fields());
    assert_eq!(from_vec.fields(), from_arr.fields());
    assert_eq!(from_arr.fields(), from_owned.fields());
    Ok(())
}

#[test]
fn test_fields_keep_declaration_order() -> Result<(), ContainerError> {
    let def = define("Container", "zulu alpha mike")?;
    assert_eq!(def.fields(), ["zulu", "alpha", "mike"]);
    Ok(())
}

#[test]
fn test_duplicate_fields_are_dropped() -> Result<(), ContainerError> {
    let def = define("Container", "message user message")?;
    assert_eq!(def.fields(), ["message", "user"]);
    Ok(())
}

#[test]
fn test_empty_name_rejected() {
    let err = define("", vec!["a"]).unwrap_err();
    assert_eq!(err, ContainerError::EmptyName);
    assert_eq!(err.kind(), ErrorKind::Value);
    assert_eq!(err.to_string(), "empty container name");
}

#[test]
fn test_empty_field_entry_rejected() {
    let err = define("TestContainer", vec!["message", ""]).unwrap_err();
    assert_eq!(err, ContainerError::InvalidFieldSpec);
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn test_introspection() -> Result<(), ContainerError> {
    let def = define("User", "name email")?;
    assert_eq!(def.name(), "User");
    assert!(def.has_field("name"));
    assert!(!def.has_field("password"));
    assert!(def.is_strict());
    assert!(!def.clone().allow_others().is_strict());
    Ok(())
}

#[test]
fn test_separate_defines_are_distinct_types() -> Result<(), ContainerError> {
    // Same name, same fields, still two different types.
    let def1 = define("Container", "message")?;
    let def2 = define("Container", "message")?;

    let c1 = def1.construct().set("message", "hi".to_string())?.build();
    let c2 = def2.construct().build();

    assert!(def1.is_instance(&c1));
    assert!(!def1.is_instance(&c2));
    assert!(!def2.is_instance(&c1));
    assert!(!c1.same_def(&c2));
    Ok(())
}

#[test]
fn test_cloned_def_shares_identity() -> Result<(), ContainerError> {
    let def = define("Container", "message")?;
    let alias = def.clone();

    let c = alias.construct().build();
    assert!(def.is_instance(&c));
    Ok(())
}

#[test]
fn test_defs_with_same_name_do_not_collide() -> Result<(), ContainerError> {
    let def1 = define("Container", "message")?;
    let def2 = define("Container", Vec::<String>::new())?;

    let c1 = def1.construct().set("message", "hi".to_string())?.build();
    let c2 = def2.construct().build();

    assert_eq!(c1.get::<String>("message")?, Some("hi".to_string()));
    assert!(matches!(
        c2.get::<String>("message"),
        Err(ContainerError::NoSuchAttribute { .. })
    ));
    Ok(())
}
