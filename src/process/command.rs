//! Command lines for child processes.

use std::fmt;

/// One argument of a [`CommandLine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// The argument as passed to the child
    pub value: String,
    /// Whether the value is shown in double quotes when rendered
    pub quoted: bool,
}

/// A program and its ordered arguments.
///
/// Arguments are only ever appended, so their order is the order in which
/// the caller declared them. `Display` renders the command for logging;
/// quoting is a display hint and never changes the argv passed to the child.
///
/// # Example
///
/// ```
/// use audio_runners::process::CommandLine;
///
/// let mut cmd = CommandLine::new("/usr/bin/squeezelite");
/// cmd.push_flag("-n", "Living Room", true);
/// cmd.push("-X");
///
/// assert_eq!(cmd.args(), vec!["-n", "Living Room", "-X"]);
/// assert_eq!(cmd.to_string(), r#"/usr/bin/squeezelite -n "Living Room" -X"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<Argument>,
}

impl CommandLine {
    /// Creates a command line with no arguments.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends a plain argument.
    pub fn push(&mut self, value: impl Into<String>) -> &mut Self {
        self.args.push(Argument {
            value: value.into(),
            quoted: false,
        });
        self
    }

    /// Appends `flag` followed by `value`.
    pub fn push_flag(&mut self, flag: &str, value: impl Into<String>, quoted: bool) -> &mut Self {
        self.push(flag);
        self.args.push(Argument {
            value: value.into(),
            quoted,
        });
        self
    }

    /// Returns the program path.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the argument values in order.
    #[must_use]
    pub fn args(&self) -> Vec<&str> {
        self.args.iter().map(|a| a.value.as_str()).collect()
    }

    /// Returns the full argv, program first.
    #[must_use]
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(|a| a.value.as_str()))
            .collect()
    }

    /// Builds a [`std::process::Command`] for this command line.
    #[must_use]
    pub fn to_command(&self) -> std::process::Command {
        let mut command = std::process::Command::new(&self.program);
        command.args(self.args.iter().map(|a| &a.value));
        command
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.quoted {
                write!(f, " \"{}\"", arg.value)?;
            } else {
                write!(f, " {}", arg.value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_arguments() {
        let cmd = CommandLine::new("mpd");
        assert_eq!(cmd.program(), "mpd");
        assert!(cmd.args().is_empty());
        assert_eq!(cmd.to_string(), "mpd");
    }

    #[test]
    fn arguments_keep_push_order() {
        let mut cmd = CommandLine::new("mpd");
        cmd.push("/tmp/mpd.conf").push("--no-daemon").push("--stderr");

        assert_eq!(cmd.argv(), vec!["mpd", "/tmp/mpd.conf", "--no-daemon", "--stderr"]);
    }

    #[test]
    fn quoted_values_are_display_only() {
        let mut cmd = CommandLine::new("squeezelite");
        cmd.push_flag("-n", "Kitchen Player", true)
            .push_flag("-o", "hw:0", false);

        assert_eq!(cmd.args(), vec!["-n", "Kitchen Player", "-o", "hw:0"]);
        assert_eq!(
            cmd.to_string(),
            "squeezelite -n \"Kitchen Player\" -o hw:0"
        );
    }

    #[test]
    fn to_command_carries_program_and_args() {
        let mut cmd = CommandLine::new("squeezelite");
        cmd.push_flag("-s", "lms.local", false);

        let command = cmd.to_command();

        assert_eq!(command.get_program(), "squeezelite");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["-s", "lms.local"]);
    }
}
