/// `From` impls lifting each `$m::$var` into the `$t::$var` variant.
#[macro_export]
macro_rules! impl_wrap_from_many {
    ($t:ident, $m:ident, [$($var:ident),* $(,)?]) => {
        $(impl From<$m::$var> for $t {
            fn from(inner: $m::$var) -> Self {
                $t::$var(inner)
            }
        })*
    };
}
