//! # Resolution Context
//!
//! Extra arguments a caller passes along when resolving a hook.
//!
//! Every filter, controller and async callback invoked during one resolution
//! receives the same [`Context`]. Arguments are stored type-erased and in
//! order, so a callback can pick them up either by position or by type:
//!
//! ```rust,ignore
//! let ctx = context![request_url.clone(), locale];
//!
//! registry.add_filter(
//!     Registration::new("head.title", "site-name"),
//!     Filter::transform(|title: &String, ctx: &Context| {
//!         let locale = ctx.find::<Locale>()?;
//!         Some(format!("{title} | {}", locale.site_name()))
//!     }),
//! );
//! ```

use std::{
    any::{Any, type_name},
    fmt,
    sync::Arc,
};

type Arg = Arc<dyn Any + Send + Sync>;

/// Ordered, type-erased arguments threaded through a resolution.
///
/// Cloning is cheap: arguments are reference counted.
#[derive(Clone, Default)]
pub struct Context {
    args: Vec<Arg>,
    names: Vec<&'static str>,
}

static EMPTY: Context = Context {
    args: Vec::new(),
    names: Vec::new(),
};

impl Context {
    /// Create a context with no arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// A shared empty context, for resolutions that carry no arguments.
    pub fn empty() -> &'static Context {
        &EMPTY
    }

    /// Append an argument, builder style.
    pub fn with<T: Any + Send + Sync>(mut self, arg: T) -> Self {
        self.push(arg);
        self
    }

    /// Append an argument.
    pub fn push<T: Any + Send + Sync>(&mut self, arg: T) {
        self.args.push(Arc::new(arg));
        self.names.push(type_name::<T>());
    }

    /// The argument at `index`, if present and of type `T`.
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.args.get(index)?.downcast_ref::<T>()
    }

    /// The first argument of type `T`.
    pub fn find<T: Any>(&self) -> Option<&T> {
        self.args.iter().find_map(|arg| arg.downcast_ref::<T>())
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if the context carries no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.names).finish()
    }
}

/// Build a [`Context`] from a list of arguments.
///
/// ```rust,ignore
/// let ctx = context!["/about".to_string(), 42_u32];
/// assert_eq!(ctx.get::<u32>(1), Some(&42));
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::Context::new()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Context::new()$(.with($arg))+
    };
}
