use crate::container::Container;
use crate::error::ContainerError;
use std::sync::Arc;

/// The field list accepted by [`define`], in either of its two forms.
///
/// Callers rarely name this type: `define` takes `impl Into<FieldSpec>`, so
/// a space-delimited `&str`, a `Vec` of names, or an array literal all work
/// directly.
///
/// ```
/// use fieldlock::define;
///
/// // These declare the same fields.
/// let a = define("Point", "x y")?;
/// let b = define("Point", ["x", "y"])?;
/// assert_eq!(a.fields(), b.fields());
/// # Ok::<(), fieldlock::ContainerError>(())
/// ```
#[derive(Clone, Debug)]
pub enum FieldSpec {
    /// An explicit ordered list of field names
    Names(Vec<String>),
    /// A single string split on whitespace at define time
    Delimited(String),
}

impl FieldSpec {
    /// Resolve to the final ordered field list: split if delimited, reject
    /// empty names, drop duplicates keeping the first occurrence.
    fn resolve(self) -> Result<Vec<String>, ContainerError> {
        let names = match self {
            FieldSpec::Names(names) => names,
            FieldSpec::Delimited(s) => s.split_whitespace().map(String::from).collect(),
        };
        let mut fields: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if name.is_empty() {
                return Err(ContainerError::InvalidFieldSpec);
            }
            if !fields.contains(&name) {
                fields.push(name);
            }
        }
        Ok(fields)
    }
}

impl From<&str> for FieldSpec {
    fn from(s: &str) -> Self {
        FieldSpec::Delimited(s.to_string())
    }
}

impl From<String> for FieldSpec {
    fn from(s: String) -> Self {
        FieldSpec::Delimited(s)
    }
}

impl From<Vec<String>> for FieldSpec {
    fn from(names: Vec<String>) -> Self {
        FieldSpec::Names(names)
    }
}

impl From<Vec<&str>> for FieldSpec {
    fn from(names: Vec<&str>) -> Self {
        FieldSpec::Names(names.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for FieldSpec {
    fn from(names: &[&str]) -> Self {
        FieldSpec::Names(names.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldSpec {
    fn from(names: [&str; N]) -> Self {
        FieldSpec::Names(names.iter().map(|s| s.to_string()).collect())
    }
}

#[derive(Debug)]
pub(crate) struct DefInner {
    pub(crate) name: String,
    pub(crate) fields: Vec<String>,
    pub(crate) strict: bool,
}

/// A record-type definition produced by [`define`].
///
/// A `ContainerDef` captures a name, an ordered set of declared field names,
/// and a strictness flag. It is read-only once created; [`construct`] builds
/// instances from it. Clones share identity with the original, but two
/// separate `define` calls always produce distinct definitions, even with
/// identical arguments.
///
/// [`construct`]: ContainerDef::construct
#[derive(Clone, Debug)]
pub struct ContainerDef {
    pub(crate) inner: Arc<DefInner>,
}

/// Define a new container type from a name and a field list.
///
/// `fields` is either a whitespace-delimited string or an explicit sequence
/// of names; duplicates are dropped, first occurrence wins. The definition
/// is strict: constructing or setting any field name outside the declared
/// list fails. Chain [`allow_others`] to get a relaxed definition instead.
///
/// # Examples
///
/// ```
/// use fieldlock::define;
///
/// let user = define("User", "name email")?;
/// let u = user.construct().set("name", "alice".to_string())?.build();
/// assert_eq!(u.get::<String>("name")?, Some("alice".to_string()));
/// assert_eq!(u.get::<String>("email")?, None); // declared but never set
/// # Ok::<(), fieldlock::ContainerError>(())
/// ```
///
/// # Errors
///
/// - Returns `ContainerError::EmptyName` if `name` is empty
/// - Returns `ContainerError::InvalidFieldSpec` if any field name is empty
///
/// [`allow_others`]: ContainerDef::allow_others
pub fn define<N, F>(name: N, fields: F) -> Result<ContainerDef, ContainerError>
where
    N: Into<String>,
    F: Into<FieldSpec>,
{
    let name = name.into();
    if name.is_empty() {
        return Err(ContainerError::EmptyName);
    }
    let fields = fields.into().resolve()?;
    Ok(ContainerDef {
        inner: Arc::new(DefInner {
            name,
            fields,
            strict: true,
        }),
    })
}

impl ContainerDef {
    /// Relax this definition so instances accept arbitrary extra fields.
    ///
    /// Extra fields live in a separate mutable store on each instance and
    /// never shadow declared fields, which stay immutable either way.
    ///
    /// ```
    /// use fieldlock::define;
    ///
    /// let event = define("Event", "kind")?.allow_others();
    /// let e = event.construct().set("kind", "click".to_string())?.build();
    /// e.set("source", "button".to_string())?;
    /// assert_eq!(e.get::<String>("source")?, Some("button".to_string()));
    /// # Ok::<(), fieldlock::ContainerError>(())
    /// ```
    pub fn allow_others(self) -> Self {
        Self {
            inner: Arc::new(DefInner {
                name: self.inner.name.clone(),
                fields: self.inner.fields.clone(),
                strict: false,
            }),
        }
    }

    /// The name given at define time, used in display output and errors.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The declared field names, in declaration order after deduplication.
    pub fn fields(&self) -> &[String] {
        &self.inner.fields
    }

    /// Returns true if `name` is one of the declared fields.
    pub fn has_field(&self, name: &str) -> bool {
        self.inner.fields.iter().any(|f| f == name)
    }

    /// Returns true if this definition rejects non-declared field names.
    pub fn is_strict(&self) -> bool {
        self.inner.strict
    }

    /// Returns true if `container` was built from this definition.
    ///
    /// Identity is per `define` call: definitions with identical names and
    /// fields from separate calls never match each other's instances.
    pub fn is_instance(&self, container: &Container) -> bool {
        Arc::ptr_eq(&self.inner, container.def())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_delimited_fields_on_whitespace() {
        let def = define("C", "message  user\tstatus").unwrap();
        assert_eq!(def.fields(), ["message", "user", "status"]);
    }

    #[test]
    fn deduplicates_fields_keeping_first_occurrence() {
        let def = define("C", "a b a c b").unwrap();
        assert_eq!(def.fields(), ["a", "b", "c"]);

        let def = define("C", vec!["x", "y", "x"]).unwrap();
        assert_eq!(def.fields(), ["x", "y"]);
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(define("", "a").unwrap_err(), ContainerError::EmptyName);
    }

    #[test]
    fn rejects_empty_field_names() {
        assert_eq!(
            define("C", vec![""]).unwrap_err(),
            ContainerError::InvalidFieldSpec
        );
        assert_eq!(
            define("C", vec!["ok", ""]).unwrap_err(),
            ContainerError::InvalidFieldSpec
        );
    }

    #[test]
    fn empty_field_list_is_valid() {
        let def = define("Empty", Vec::<String>::new()).unwrap();
        assert!(def.fields().is_empty());

        // A whitespace-only string splits to nothing.
        let def = define("Empty", "   ").unwrap();
        assert!(def.fields().is_empty());
    }

    #[test]
    fn allow_others_clears_strictness() {
        let def = define("C", "a").unwrap();
        assert!(def.is_strict());
        let def = def.allow_others();
        assert!(!def.is_strict());
        assert_eq!(def.fields(), ["a"]);
    }
}
