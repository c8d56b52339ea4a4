use fuel_subsidy_core::TariffConfig;

const DEFAULT_CONFIG_PATH: &str = "config/tariff";
const ENV_PREFIX: &str = "FUELCALC_TARIFF";

/// Build the tariff from an optional config file overlaid by
/// `FUELCALC_TARIFF_*` environment variables. Keys absent from both keep
/// their default values.
///
/// An explicitly named file must exist; the default path is optional.
pub fn load_tariff(path: Option<&str>) -> Result<TariffConfig, Box<dyn std::error::Error>> {
    let (config_path, required) = match path {
        Some(p) => (p, true),
        None => (DEFAULT_CONFIG_PATH, false),
    };

    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(required));
    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));
    let tariff: TariffConfig = builder.build()?.try_deserialize()?;

    tariff.validate()?;
    tracing::info!(
        config = config_path,
        current_flat_price = %tariff.current_flat_price,
        new_subsidized_price = %tariff.new_subsidized_price,
        subsidy_limit_litres = %tariff.subsidy_limit_litres,
        "tariff loaded"
    );
    Ok(tariff)
}
