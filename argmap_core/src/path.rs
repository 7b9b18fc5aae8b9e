use std::sync::Arc;

pub(crate) type Accessor<M, T> = Arc<dyn Fn(&mut M) -> &mut T + Send + Sync>;

// Pins the closure signature to the higher-ranked `for<'m> Fn(&'m mut M) -> &'m mut T`.
pub(crate) fn accessor<M, T, F>(f: F) -> Accessor<M, T>
where
    F: Fn(&mut M) -> &mut T + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A statically checked path from a model `M` to one of its (possibly nested) fields `T`.
///
/// The path records a display name per segment, and an accessor closure that walks `M` down to `T`.
/// Paths through `Option<N>` fields instantiate `N::default()` when walked, so writing through a path always succeeds.
///
/// ### Example
/// ```
/// # use argmap_core as argmap;
/// use argmap::PropertyPath;
///
/// #[derive(Default)]
/// struct Root {
///     database: Option<Database>,
/// }
///
/// #[derive(Default)]
/// struct Database {
///     port: u16,
/// }
///
/// let path = PropertyPath::nested("database", |r: &mut Root| &mut r.database)
///     .then(PropertyPath::new("port", |d: &mut Database| &mut d.port));
/// assert_eq!(path.display(), "database.port");
///
/// let mut root = Root::default();
/// *path.apply(&mut root) = 5432;
/// assert_eq!(root.database.unwrap().port, 5432);
/// ```
pub struct PropertyPath<M, T> {
    segments: Vec<String>,
    accessor: Accessor<M, T>,
}

impl<M, T> Clone for PropertyPath<M, T> {
    fn clone(&self) -> Self {
        Self {
            segments: self.segments.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

impl<M, T> std::fmt::Debug for PropertyPath<M, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PropertyPath[{}]", self.display())
    }
}

impl<M: 'static, T: 'static> PropertyPath<M, T> {
    /// A single segment path to a plain field.
    ///
    /// The display form identifies the property: options whose paths display the same are one property.
    /// Their values merge into a single assignment (through the first registered option), and a value for one satisfies a requirement on the other.
    /// Name each segment after the field it reaches, as [`property!`](crate::property) does.
    pub fn new(
        name: impl Into<String>,
        access: impl Fn(&mut M) -> &mut T + Send + Sync + 'static,
    ) -> Self {
        Self {
            segments: vec![name.into()],
            accessor: accessor(access),
        }
    }

    /// A single segment path through an `Option<T>` field, instantiated with `T::default()` on access.
    pub fn nested(
        name: impl Into<String>,
        access: impl Fn(&mut M) -> &mut Option<T> + Send + Sync + 'static,
    ) -> Self
    where
        T: Default,
    {
        Self {
            segments: vec![name.into()],
            accessor: accessor(move |model: &mut M| access(model).get_or_insert_with(T::default)),
        }
    }

    /// Extend this path by `next`.
    pub fn then<U: 'static>(self, next: PropertyPath<T, U>) -> PropertyPath<M, U> {
        let PropertyPath {
            mut segments,
            accessor: head,
        } = self;
        let PropertyPath {
            segments: tail_segments,
            accessor: tail,
        } = next;
        segments.extend(tail_segments);

        PropertyPath {
            segments,
            accessor: accessor(move |model: &mut M| tail(head(model))),
        }
    }
}

impl<M, T> PropertyPath<M, T> {
    /// Walk `model` down to the target field.
    pub fn apply<'m>(&self, model: &'m mut M) -> &'m mut T {
        (self.accessor)(model)
    }

    /// The segment names, from the model root to the target field.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The dotted display form, ex: `database.port`.
    pub fn display(&self) -> String {
        self.segments.join(".")
    }
}

/// Build a [`PropertyPath`] from a model type and a (dotted) field expression.
///
/// ### Example
/// ```
/// # use argmap_core as argmap;
/// use argmap::property;
///
/// #[derive(Default)]
/// struct Model {
///     logging: Logging,
/// }
///
/// #[derive(Default)]
/// struct Logging {
///     level: u8,
/// }
///
/// let path = property!(Model, logging.level);
/// assert_eq!(path.display(), "logging.level");
///
/// let mut model = Model::default();
/// *path.apply(&mut model) = 3;
/// assert_eq!(model.logging.level, 3);
/// ```
#[macro_export]
macro_rules! property {
    ($model:ty, $($field:ident).+) => {
        $crate::PropertyPath::new(
            stringify!($($field).+).replace(' ', ""),
            |model: &mut $model| &mut model.$($field).+,
        )
    };
}
