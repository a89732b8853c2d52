use console::{style, Color};

#[derive(Default, Debug)]
/// One formatted log record, as written to stderr by the logger
pub struct LogMessage {
    /// The log message
    pub(crate) message: String,

    /// The log level
    pub(crate) level: String,

    /// The number of seconds elapsed since the program started
    pub(crate) time_offset: f32,

    /// The module from which log::* was called
    pub(crate) module: String,
}

/// Implementation of LogMessage
impl LogMessage {
    /// Create a string representation of the log message
    ///
    /// ex:  DBG      0.012 imgscout::fetcher following redirect 1/10 to https://localhost/b
    pub fn as_str(&self) -> String {
        let (level_name, level_color) = match self.level.as_str() {
            "ERROR" => ("ERR", Color::Red),
            "WARN" => ("WRN", Color::Red),
            "INFO" => ("INF", Color::Cyan),
            "DEBUG" => ("DBG", Color::Yellow),
            "TRACE" => ("TRC", Color::Magenta),
            _ => ("MSG", Color::White),
        };

        format!(
            "{} {:10.03} {} {}\n",
            style(level_name).bg(level_color).black(),
            style(self.time_offset).dim(),
            self.module,
            style(&self.message).dim(),
        )
    }
}
