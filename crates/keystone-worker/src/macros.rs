//! Mechanical generation of the four status forms.

/// Generate Form A to Form D wrappers for methods of the shape
/// `fn op(&self, args..) -> AppResult<T>`.
///
/// Only the core method is written by hand. For each listed method the
/// macro emits, in a new inherent `impl` block:
///
/// - `checked(&self, args..) -> bool` (Form A)
/// - `into(&self, &mut StatusResult<T>, args..)` (Form B)
/// - `spawn(self: &Arc<Self>, &WorkerPool, args..) -> TaskHandle<bool>` (Form C)
/// - `spawn_with(self: &Arc<Self>, &WorkerPool, args.., callback)
///   -> StatusResult<Option<TaskHandle<()>>>` (Form D)
///
/// Async forms clone the `Arc`, so the component lives as long as any job
/// that uses it. Arguments must be `Send + 'static` for the async forms.
///
/// ```ignore
/// impl Counter {
///     fn add(&self, amount: u64) -> AppResult<u64> { /* ... */ }
/// }
///
/// keystone_worker::status_forms! {
///     impl Counter {
///         fn add(&self, amount: u64) -> u64 => {
///             checked: add_checked,
///             into: add_into,
///             spawn: add_spawn,
///             spawn_with: add_spawn_with,
///         };
///     }
/// }
/// ```
#[macro_export]
macro_rules! status_forms {
    (
        impl $ty:ty {
            $(
                fn $op:ident(&self $(, $arg:ident : $arg_ty:ty)* $(,)?) -> $out:ty => {
                    checked: $checked:ident,
                    into: $into:ident,
                    spawn: $spawn:ident,
                    spawn_with: $spawn_with:ident $(,)?
                };
            )*
        }
    ) => {
        impl $ty {
            $(
                #[doc = concat!("Form A of `", stringify!($op), "`: whether it succeeded.")]
                pub fn $checked(&self $(, $arg: $arg_ty)*) -> bool {
                    $crate::keystone_core::boundary::succeeded(|| self.$op($($arg),*))
                }

                #[doc = concat!("Form B of `", stringify!($op), "`: fill `result` with its outcome.")]
                pub fn $into(
                    &self,
                    result: &mut $crate::keystone_core::status::StatusResult<$out>
                    $(, $arg: $arg_ty)*
                ) {
                    $crate::keystone_core::boundary::fill(result, || self.$op($($arg),*));
                }

                #[doc = concat!("Form C of `", stringify!($op), "`: run it on `pool`.")]
                pub fn $spawn(
                    self: &::std::sync::Arc<Self>,
                    pool: &$crate::pool::WorkerPool
                    $(, $arg: $arg_ty)*
                ) -> $crate::handle::TaskHandle<bool> {
                    let this = ::std::sync::Arc::clone(self);
                    pool.spawn_checked(move || this.$op($($arg),*))
                }

                #[doc = concat!(
                    "Form D of `", stringify!($op),
                    "`: run it on `pool`, then pass its result to `callback`."
                )]
                pub fn $spawn_with<C>(
                    self: &::std::sync::Arc<Self>,
                    pool: &$crate::pool::WorkerPool
                    $(, $arg: $arg_ty)*,
                    callback: C,
                ) -> $crate::keystone_core::status::StatusResult<
                    ::std::option::Option<$crate::handle::TaskHandle<()>>,
                >
                where
                    C: FnOnce($crate::keystone_core::status::StatusResult<$out>)
                        + Send
                        + 'static,
                {
                    let this = ::std::sync::Arc::clone(self);
                    pool.spawn_with_callback(move || this.$op($($arg),*), callback)
                }
            )*
        }
    };
}
