// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

use super::{WriterConfig, rolling_file_appender_impl, tracing_config::TracingConfig};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. ANSI
/// escapes are off since the output ends up in a file.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(false)
            .with_thread_names(false)
            .with_target(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers. This does not initialize the tracing system. Don't forget to do
/// this manually, by calling `init` on the returned layers.
///
/// For example, once you have the layers, you can run the following:
/// `try_create_layers(..).map(|layers|
/// tracing_subscriber::registry().with(layers).init());`
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let level_filter = tracing_config.get_level_filter();
    if level_filter == LevelFilter::OFF {
        return Ok(None);
    }

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration.
    return_it.push(Box::new(level_filter));

    if let Some(layer) =
        try_create_file_layer(level_filter, tracing_config.get_writer_config())?
    {
        return_it.push(layer);
    }

    Ok(Some(return_it))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
///
/// # Errors
///
/// Returns an error if the log file path is unusable.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::File(log_file_path) => {
            let file = rolling_file_appender_impl::try_create(log_file_path.as_str())?;
            Some(Box::new(
                fmt_layer.with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::None => None,
    })
}
