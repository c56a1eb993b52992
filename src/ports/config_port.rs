//! Configuration access port trait.

/// Section/key lookup over whatever configuration source the CLI was given.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool;
}
