pub mod oracle;
pub mod telemetry;
