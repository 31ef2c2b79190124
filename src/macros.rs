// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // s!() → String::new()
    () => {
        ::std::string::String::new()
    };
    // s!(x) → String::from(x)
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
