use std::any::{type_name, Any, TypeId};
use std::fmt;

type RenderFn = fn(&(dyn Any + Send + Sync), &mut fmt::Formatter<'_>) -> fmt::Result;

/// A container for one type-erased field value that preserves type information
/// and knows how to render itself.
pub(crate) struct FieldValue {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
    render: RenderFn,
}

impl FieldValue {
    /// Create a new FieldValue from any value that implements Any, Send, Sync,
    /// and Debug. The Debug bound is what lets containers produce a textual
    /// representation without knowing the stored type.
    pub(crate) fn new<T: Any + Send + Sync + fmt::Debug>(value: T) -> Self {
        fn render_as<T: Any + fmt::Debug>(
            value: &(dyn Any + Send + Sync),
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            match value.downcast_ref::<T>() {
                Some(v) => write!(f, "{:?}", v),
                // Unreachable: the render fn is monomorphized alongside the box.
                None => f.write_str("<?>"),
            }
        }

        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            value: Box::new(value),
            render: render_as::<T>,
        }
    }

    /// Check if the contained value is of type T
    pub(crate) fn is_type<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Get a reference to the contained value if it is of type T
    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Name of the stored type, for error messages
    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.render)(self.value.as_ref(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldValue;

    #[test]
    fn stores_and_downcasts() {
        let v = FieldValue::new(42i32);
        assert!(v.is_type::<i32>());
        assert!(!v.is_type::<String>());
        assert_eq!(v.downcast_ref::<i32>(), Some(&42));
        assert_eq!(v.downcast_ref::<String>(), None);
    }

    #[test]
    fn renders_with_debug_repr() {
        assert_eq!(format!("{:?}", FieldValue::new(42i32)), "42");
        assert_eq!(
            format!("{:?}", FieldValue::new("hi".to_string())),
            "\"hi\""
        );
        assert_eq!(format!("{:?}", FieldValue::new(vec![1, 2])), "[1, 2]");
    }

    #[test]
    fn reports_stored_type_name() {
        let v = FieldValue::new(3.14f64);
        assert_eq!(v.type_name(), "f64");
    }
}
