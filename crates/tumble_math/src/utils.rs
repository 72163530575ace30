macro_rules! strip_plus {
    (+ $($rest:tt)*) => {
        $($rest)*
    };
}
pub(crate) use strip_plus;
