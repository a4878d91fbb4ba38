// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Note that if you wrap this up in a non blocking writer, the guard has to outlive the
/// run, otherwise lines are lost when the chart is torn down. So the plain appender is
/// used.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access current folder {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_rejects_path_without_file_name() {
        assert!(try_create("/").is_err());
    }
}
