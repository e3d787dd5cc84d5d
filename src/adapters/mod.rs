/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: file access, console
/// progress output and report rendering.
pub mod outbound;
