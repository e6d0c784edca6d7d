/// Produces the plaintext one-time codes sent to users.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}
