/// Ports module defining interfaces for hexagonal architecture
///
/// The application core reaches every external system (file system,
/// console, report sinks) through these driven ports.
pub mod outbound;
