use crate::def::{ContainerDef, DefInner};
use crate::error::ContainerError;
use crate::value::FieldValue;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

impl ContainerDef {
    /// Start constructing an instance of this definition.
    ///
    /// Field values are supplied through chained [`ContainerBuilder::set`]
    /// calls; [`ContainerBuilder::build`] seals the instance. Declared
    /// fields left unset default to the absent marker.
    ///
    /// ```
    /// use fieldlock::define;
    ///
    /// let def = define("Reply", "body status")?;
    /// let reply = def.construct()
    ///     .set("body", "ok".to_string())?
    ///     .set("status", 200i32)?
    ///     .build();
    /// assert_eq!(reply.get::<i32>("status")?, Some(200));
    /// # Ok::<(), fieldlock::ContainerError>(())
    /// ```
    pub fn construct(&self) -> ContainerBuilder {
        ContainerBuilder {
            def: Arc::clone(&self.inner),
            declared: HashMap::new(),
            extras: HashMap::new(),
        }
    }
}

/// An in-progress instance: the keyword-argument phase of construction.
///
/// Each `set` is validated immediately against the definition, so a strict
/// definition rejects unknown names before any instance exists. `build`
/// itself cannot fail.
#[derive(Debug)]
pub struct ContainerBuilder {
    def: Arc<DefInner>,
    declared: HashMap<String, Option<FieldValue>>,
    extras: HashMap<String, FieldValue>,
}

impl ContainerBuilder {
    /// Supply a value for a field.
    ///
    /// Repeating a name before `build` overwrites the earlier value; the
    /// instance only becomes immutable once built.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::UnknownAttribute` if the definition is
    /// strict and `name` was not declared.
    pub fn set<T>(mut self, name: impl Into<String>, value: T) -> Result<Self, ContainerError>
    where
        T: Any + Send + Sync + fmt::Debug,
    {
        let name = name.into();
        if self.def.fields.contains(&name) {
            self.declared.insert(name, Some(FieldValue::new(value)));
        } else if !self.def.strict {
            self.extras.insert(name, FieldValue::new(value));
        } else {
            return Err(ContainerError::UnknownAttribute {
                container: self.def.name.clone(),
                name,
            });
        }
        Ok(self)
    }

    /// Seal the instance. Declared fields that were never supplied are set
    /// to the absent marker; from here on no declared field can change.
    pub fn build(mut self) -> Container {
        for field in &self.def.fields {
            if !self.declared.contains_key(field) {
                self.declared.insert(field.clone(), None);
            }
        }
        let extras = if self.def.strict {
            None
        } else {
            Some(Mutex::new(self.extras))
        };
        Container {
            def: self.def,
            declared: self.declared,
            extras,
        }
    }
}

/// One instance of a container definition.
///
/// Declared fields are fixed for the lifetime of the instance: reads go
/// through [`get`], and any [`set`] on a declared field fails. Instances of
/// relaxed definitions additionally carry a mutable store for extra fields,
/// guarded by a lock so a shared instance can be written from multiple
/// threads.
///
/// [`get`]: Container::get
/// [`set`]: Container::set
#[derive(Debug)]
pub struct Container {
    def: Arc<DefInner>,
    declared: HashMap<String, Option<FieldValue>>,
    extras: Option<Mutex<HashMap<String, FieldValue>>>,
}

impl Container {
    pub(crate) fn def(&self) -> &Arc<DefInner> {
        &self.def
    }

    /// Read a field as type `T`, cloning the stored value out.
    ///
    /// A declared field that was never supplied reads as `Ok(None)`, the
    /// absent marker. That is distinct from the field not existing at all.
    ///
    /// # Errors
    ///
    /// - Returns `ContainerError::NoSuchAttribute` if `name` is neither
    ///   declared nor a previously set extra field
    /// - Returns `ContainerError::TypeMismatch` if the stored value is not
    ///   a `T`
    /// - Returns `ContainerError::LockPoisoned` if the extra-field lock
    ///   was poisoned
    pub fn get<T>(&self, name: &str) -> Result<Option<T>, ContainerError>
    where
        T: Any + Clone,
    {
        if let Some(slot) = self.declared.get(name) {
            return match slot {
                None => Ok(None),
                Some(value) => Self::read_as(name, value).map(Some),
            };
        }
        if let Some(extras) = &self.extras {
            let store = extras.lock().map_err(|_| ContainerError::LockPoisoned)?;
            if let Some(value) = store.get(name) {
                return Self::read_as(name, value).map(Some);
            }
        }
        Err(self.no_such_attribute(name))
    }

    /// Write a field.
    ///
    /// Declared fields are immutable after construction; this fails for
    /// them unconditionally, in strict and relaxed mode alike. On a relaxed
    /// instance any other name is created or overwritten in the extra-field
    /// store. On a strict instance unknown names are rejected.
    ///
    /// # Errors
    ///
    /// - Returns `ContainerError::ImmutableProperty` if `name` is declared
    /// - Returns `ContainerError::NoSuchAttribute` if the definition is
    ///   strict and `name` is not declared
    /// - Returns `ContainerError::LockPoisoned` if the extra-field lock
    ///   was poisoned
    pub fn set<T>(&self, name: impl Into<String>, value: T) -> Result<(), ContainerError>
    where
        T: Any + Send + Sync + fmt::Debug,
    {
        let name = name.into();
        if self.declared.contains_key(&name) {
            return Err(ContainerError::ImmutableProperty { name });
        }
        match &self.extras {
            Some(extras) => {
                let mut store = extras.lock().map_err(|_| ContainerError::LockPoisoned)?;
                store.insert(name, FieldValue::new(value));
                Ok(())
            }
            None => Err(self.no_such_attribute(&name)),
        }
    }

    /// Returns true if the field holds a value, false if it holds the
    /// absent marker.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::NoSuchAttribute` if the field doesn't exist
    /// on this instance.
    pub fn is_set(&self, name: &str) -> Result<bool, ContainerError> {
        if let Some(slot) = self.declared.get(name) {
            return Ok(slot.is_some());
        }
        if let Some(extras) = &self.extras {
            let store = extras.lock().map_err(|_| ContainerError::LockPoisoned)?;
            if store.contains_key(name) {
                return Ok(true);
            }
        }
        Err(self.no_such_attribute(name))
    }

    /// The defining container name.
    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// The declared field names, in declaration order.
    pub fn fields(&self) -> &[String] {
        &self.def.fields
    }

    /// Returns true if `name` is a declared field of this instance.
    pub fn has_field(&self, name: &str) -> bool {
        self.declared.contains_key(name)
    }

    /// Returns true if this instance rejects non-declared field names.
    pub fn is_strict(&self) -> bool {
        self.def.strict
    }

    /// Returns true if both instances were built from the same `define`
    /// call.
    pub fn same_def(&self, other: &Container) -> bool {
        Arc::ptr_eq(&self.def, &other.def)
    }

    fn read_as<T>(name: &str, value: &FieldValue) -> Result<T, ContainerError>
    where
        T: Any + Clone,
    {
        if value.is_type::<T>() {
            if let Some(v) = value.downcast_ref::<T>() {
                return Ok(v.clone());
            }
        }
        Err(ContainerError::TypeMismatch {
            name: name.to_string(),
            stored: value.type_name(),
        })
    }

    fn no_such_attribute(&self, name: &str) -> ContainerError {
        ContainerError::NoSuchAttribute {
            container: self.def.name.clone(),
            name: name.to_string(),
        }
    }
}

/// Renders `Name(field=value, ...)` with fields sorted by name.
///
/// Declared and extra fields participate alike; absent fields render as
/// `None` and present values use their `Debug` representation, so the
/// output is deterministic and safe to assert against in tests.
impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<(String, String)> = self
            .declared
            .iter()
            .map(|(name, slot)| {
                let rendered = match slot {
                    None => "None".to_string(),
                    Some(value) => format!("{:?}", value),
                };
                (name.clone(), rendered)
            })
            .collect();
        if let Some(extras) = &self.extras {
            // A poisoned lock still holds renderable data.
            let store = extras.lock().unwrap_or_else(PoisonError::into_inner);
            for (name, value) in store.iter() {
                parts.push((name.clone(), format!("{:?}", value)));
            }
        }
        parts.sort_by(|a, b| a.0.cmp(&b.0));

        write!(f, "{}(", self.def.name)?;
        for (i, (name, rendered)) in parts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, rendered)?;
        }
        f.write_str(")")
    }
}
