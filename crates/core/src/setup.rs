//! Process-wide setup from [`MoneyConfig`].

use coinage_shared::types::{lookup, set_default_currency};
use coinage_shared::{Currency, MoneyConfig, MoneyResult};

use crate::currency::{ConversionContext, RateTableBroker, set_active_context};

/// Applies a configuration to the process.
///
/// Sets the default currency, builds a [`RateTableBroker`] from the
/// configured rates and installs it as the active context. Nothing is
/// changed if the configuration is invalid.
pub fn install(config: &MoneyConfig) -> MoneyResult<ConversionContext> {
    let (context, default) = prepare(config).inspect_err(|e| {
        tracing::warn!(error = %e, code = e.error_code(), "Money configuration rejected");
    })?;

    set_default_currency(default)?;
    set_active_context(context.clone());

    tracing::info!(
        default_currency = %default,
        rates = config.exchange_rates.len(),
        precision = ?config.precision,
        "Money configuration installed"
    );
    Ok(context)
}

fn prepare(config: &MoneyConfig) -> MoneyResult<(ConversionContext, &'static Currency)> {
    let broker = RateTableBroker::from_config(config)?;
    let mut context = ConversionContext::new(broker);
    if let Some(digits) = config.precision {
        context = context.with_precision(digits);
    }
    Ok((context, lookup(&config.default_currency)?))
}
