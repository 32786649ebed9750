//! # fieldlock
//!
//! Runtime-defined immutable record containers with strict field validation.
//!
//! `fieldlock` lets you construct lightweight record ("container") types at
//! runtime from nothing but a name and a list of field names, without a
//! struct declaration or derive. Each definition produces instances
//! whose declared fields are validated at construction, readable by name,
//! and permanently write-protected afterwards.
//!
//! ## Key Features
//!
//! - **Immutable by construction**: declared fields can never be reassigned
//!   once an instance is built
//! - **Validated**: strict definitions reject any field name that was never
//!   declared, with field-specific error messages
//! - **Type-safe reads**: values are type-erased in storage and checked at
//!   runtime on the way out
//! - **Relaxed mode**: opt in to arbitrary extra fields, stored separately
//!   from the immutable declared ones
//! - **Deterministic display**: instances render as sorted
//!   `Name(field=value, ...)` strings, safe to assert against
//! - **No macros**: pure runtime solution
//!
//! ## Usage Examples
//!
//! ### Defining and constructing a container
//!
//! ```rust
//! use fieldlock::{define, ContainerError};
//!
//! fn main() -> Result<(), ContainerError> {
//!     // Declare the shape once; fields can be a space-delimited string
//!     // or an explicit list.
//!     let request = define("Request", "signature user_id")?;
//!
//!     // Construct an instance with keyword-style chained sets.
//!     let r = request.construct()
//!         .set("signature", "test_signature".to_string())?
//!         .set("user_id", 42u64)?
//!         .build();
//!
//!     assert_eq!(r.get::<String>("signature")?, Some("test_signature".to_string()));
//!     assert_eq!(r.get::<u64>("user_id")?, Some(42));
//!     Ok(())
//! }
//! ```
//!
//! ### Absent fields
//!
//! Declared fields you don't supply still exist: they hold the absent
//! marker and read back as `None`:
//!
//! ```rust
//! use fieldlock::define;
//!
//! let reply = define("Reply", "message status")?;
//! let r = reply.construct().set("message", "ok".to_string())?.build();
//!
//! assert_eq!(r.get::<i32>("status")?, None);
//! assert!(!r.is_set("status")?);
//! # Ok::<(), fieldlock::ContainerError>(())
//! ```
//!
//! ### Immutability
//!
//! Writing a declared field after construction always fails, and reading a
//! name that was never declared fails too:
//!
//! ```rust
//! use fieldlock::{define, ContainerError};
//!
//! let model = define("Model", "message")?;
//! let m = model.construct().set("message", "hello".to_string())?.build();
//!
//! // Declared fields are sealed at build time.
//! match m.set("message", "hey".to_string()) {
//!     Err(ContainerError::ImmutableProperty { name }) => assert_eq!(name, "message"),
//!     other => panic!("expected ImmutableProperty, got {:?}", other),
//! }
//!
//! // Unknown fields don't exist on strict instances.
//! assert!(m.get::<String>("password").is_err());
//! # Ok::<(), fieldlock::ContainerError>(())
//! ```
//!
//! ### Relaxed mode
//!
//! A definition built with [`ContainerDef::allow_others`] accepts arbitrary
//! extra fields, at construction time and afterwards. Extra fields stay
//! mutable; declared fields stay locked:
//!
//! ```rust
//! use fieldlock::define;
//!
//! let event = define("Event", "kind")?.allow_others();
//! let e = event.construct()
//!     .set("kind", "click".to_string())?
//!     .set("x", 10i32)?            // not declared, accepted anyway
//!     .build();
//!
//! e.set("y", 20i32)?;              // extras can be added later...
//! e.set("y", 25i32)?;              // ...and overwritten
//! assert_eq!(e.get::<i32>("y")?, Some(25));
//!
//! assert!(e.set("kind", "move".to_string()).is_err()); // still immutable
//! # Ok::<(), fieldlock::ContainerError>(())
//! ```
//!
//! ### Display output
//!
//! ```rust
//! use fieldlock::define;
//!
//! let boxed = define("Box", ["b", "a"])?;
//! let b = boxed.construct().set("a", 1i32)?.set("b", 2i32)?.build();
//!
//! // Fields are sorted by name, not declaration order.
//! assert_eq!(b.to_string(), "Box(a=1, b=2)");
//! # Ok::<(), fieldlock::ContainerError>(())
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use fieldlock::{define, ContainerError, ErrorKind};
//!
//! let strict = define("T", "message").unwrap();
//!
//! match strict.construct().set("status", 0i32) {
//!     Err(ContainerError::UnknownAttribute { container, name }) => {
//!         assert_eq!(container, "T");
//!         assert_eq!(name, "status");
//!     }
//!     other => panic!("expected UnknownAttribute, got {:?}", other),
//! }
//!
//! // Errors group into three coarse categories when the variant doesn't matter.
//! assert_eq!(define("", "a").unwrap_err().kind(), ErrorKind::Value);
//! ```

mod container;
mod def;
mod error;
mod value;

pub use container::{Container, ContainerBuilder};
pub use def::{define, ContainerDef, FieldSpec};
pub use error::{ContainerError, ErrorKind};
