use {
    crate::prelude::*,
    colored::ColoredString,
    indicatif::{ProgressBar, ProgressStyle},
    std::time::Duration,
};

/// Print a grey colored line to separate sections
pub(crate) fn separator() -> ColoredString {
    "\n-=-=-=-=-=-=-=-".truecolor(100, 100, 100)
}

/// Print the title of the currently executed command.
#[macro_export]
macro_rules! command_title {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "\n{arrow} {title}{separator}",
                arrow = "▶".bold().purple(),
                title = format!($($args)*).bold(),
                separator = $crate::display::separator()
            );
        }
    };
}

/// Notify the user of a successful operation. Basicaly [`println!`] but
/// includes a not [`JSON_MODE`] check and some success formatting.
#[macro_export]
macro_rules! notify_success {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "[{check}] {msg}",
                check = "✔".green().bold(),
                msg = format!($($args)*)
            );
        }
    };
}

/// Similar to [`notify_success!`] but for non-fatal notices. Printed to
/// stdout so it stays in order with the rest of the output.
#[macro_export]
macro_rules! notify_warning {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "[{warning}] {msg}",
                warning = "⚠".yellow().bold(),
                msg = format!($($args)*)
            );
        }
    };
}

/// Formatted list item.
#[macro_export]
macro_rules! item {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "    {arrow} {item}",
                arrow = "▶".truecolor(100, 100, 100),
                item = format!($($args)*)
            );
        }
    };
}

/// Macro to print a loading state. Accepts a message and returns a
/// [`LoadingHandle`] to mark the loading as succeeded or errored.
#[macro_export]
macro_rules! loading {
    ($($args:tt)*) => {
        $crate::display::LoadingHandle::start(format!($($args)*))
    };
}

/// Spinner shown while a step is in progress. Nothing is drawn in
/// [`JSON_MODE`].
pub(crate) struct LoadingHandle {
    bar: Option<ProgressBar>,
    message: String,
}

impl LoadingHandle {
    pub(crate) fn start(message: String) -> Self {
        if JSON_MODE.load(Ordering::Relaxed) {
            return Self { bar: None, message };
        }

        let style = ProgressStyle::with_template("[{spinner:.magenta}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["/", "-", "\\", "|", "/"]);

        let bar = ProgressBar::new_spinner().with_style(style);

        bar.set_message(message.clone());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self {
            bar: Some(bar),
            message,
        }
    }

    /// Mark the loading as successful.
    pub(crate) fn success(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();

            println!("[{check}] {msg}", check = "✔".green().bold(), msg = self.message);
        }
    }

    /// Mark the loading as errored.
    pub(crate) fn error(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();

            println!("[{ballot}] {msg}", ballot = "✘".red().bold(), msg = self.message);
        }
    }
}

/// If [`JSON_MODE`] is enabled, output the given data as JSON.
pub(crate) fn json_output<T: Serialize>(data: &T) -> AnyResult<(), BlobmintCliError> {
    if !JSON_MODE.load(Ordering::Relaxed) {
        return Ok(());
    }

    match serde_json::to_string_pretty(data) {
        Ok(json) => {
            println!("{}", json);

            Ok(())
        }
        Err(e) => Err(BlobmintCliError::Any(e.into())),
    }
}

/// The single failure payload printed to stdout in [`JSON_MODE`].
pub(crate) fn json_error(error: &BlobmintCliError) -> serde_json::Value {
    match error {
        BlobmintCliError::Workflow(e) => json!({
            "error": e.user_message(),
            "detail": e.to_string(),
        }),
        e => json!({ "error": e.to_string() }),
    }
}
