use serde::Deserialize;

use crate::dashboard::types::{Dashboard, OverrideValue, Panel};
use crate::lint::engine::Rule;
use crate::lint::results::{RuleResult, Severity};

/// The recognized unit identifiers, enumerated from the upstream dashboarding
/// tool's value-format categories. This list is a compatibility surface and
/// must match the upstream vocabulary exactly.
pub const VALID_UNITS: &[&str] = &[
    // Scalar, e.g. number of loaded classes
    "none",
    // Misc
    "string",
    // short
    "short", "percent", "percentunit", "humidity", "dB", "hex0x", "hex", "sci", "locale", "pixel",
    // Acceleration
    "accMS2", "accFS2", "accG",
    // Angle
    "degree", "radian", "grad", "arcmin", "arcsec",
    // Area
    "areaM2", "areaF2", "areaMI2",
    // Computation
    "flops", "mflops", "gflops", "tflops", "pflops", "eflops", "zflops", "yflops",
    // Concentration
    "ppm", "conppb", "conngm3", "conngNm3", "conμgm3", "conμgNm3", "conmgm3", "conmgNm3",
    "congm3", "congNm3", "conmgdL", "conmmolL",
    // Currency
    "currencyUSD", "currencyGBP", "currencyEUR", "currencyJPY", "currencyRUB", "currencyUAH",
    "currencyBRL", "currencyDKK", "currencyISK", "currencyNOK", "currencySEK", "currencyCZK",
    "currencyCHF", "currencyPLN", "currencyBTC", "currencymBTC", "currencyμBTC", "currencyZAR",
    "currencyINR", "currencyKRW", "currencyIDR", "currencyPHP", "currencyVND",
    // Data
    "bytes", "decbytes", "bits", "decbits", "kbytes", "deckbytes", "mbytes", "decmbytes",
    "gbytes", "decgbytes", "tbytes", "dectbytes", "pbytes", "decpbytes",
    // Data rate
    "pps", "binBps", "Bps", "binbps", "bps", "KiBs", "Kibits", "KBs", "Kbits", "MiBs", "Mibits",
    "MBs", "Mbits", "GiBs", "Gibits", "GBs", "Gbits", "TiBs", "Tibits", "TBs", "Tbits", "PiBs",
    "Pibits", "PBs", "Pbits",
    // Date & time
    "dateTimeAsIso", "dateTimeAsIsoNoDateIfToday", "dateTimeAsUS", "dateTimeAsUSNoDateIfToday",
    "dateTimeAsLocal",
    // Datetime local (No date if today)
    "dateTimeAsLocalNoDateIfToday", "dateTimeAsSystem", "dateTimeFromNow",
    // Energy
    "watt", "kwatt", "megwatt", "gwatt", "mwatt", "Wm2", "voltamp", "kvoltamp", "voltampreact",
    "kvoltampreact", "watth", "watthperkg", "kwatth", "kwattm", "amph", "kamph", "mamph",
    "joule", "ev", "amp", "kamp", "mamp", "volt", "kvolt", "mvolt", "dBm", "ohm", "kohm",
    "Mohm", "farad", "µfarad", "nfarad", "pfarad", "ffarad", "henry", "mhenry", "µhenry",
    "lumens",
    // Flow
    "flowgpm", "flowcms", "flowcfs", "flowcfm", "litreh", "flowlpm", "flowmlpm", "lux",
    // Force
    "forceNm", "forcekNm", "forceN", "forcekN",
    // Hash rate
    "Hs", "KHs", "MHs", "GHs", "THs", "PHs", "EHs",
    // Mass
    "massmg", "massg", "masslb", "masskg", "masst",
    // Length
    "lengthmm", "lengthin", "lengthft", "lengthm", "lengthkm", "lengthmi",
    // Pressure
    "pressurembar", "pressurebar", "pressurekbar", "pressurepa", "pressurehpa", "pressurekpa",
    "pressurehg", "pressurepsi",
    // Radiation
    "radbq", "radci", "radgy", "radrad", "radsv", "radmsv", "radusv", "radrem", "radexpckg",
    "radr", "radsvh", "radmsvh", "radusvh",
    // Rotational Speed
    "rotrpm", "rothz", "rotrads", "rotdegs",
    // Temperature
    "celsius", "fahrenheit", "kelvin",
    // Time
    "hertz", "ns", "µs", "ms", "s", "m", "h", "d", "dtdurationms", "dtdurations", "dthms",
    "dtdhms", "timeticks", "clockms", "clocks",
    // Throughput
    "cps", "ops", "reqps", "rps", "wps", "iops", "cpm", "opm", "rpm", "wpm", "mps", "mpm",
    // Velocity
    "velocityms", "velocitykmh", "velocitymph", "velocityknot",
    // Volume
    "mlitre", "litre", "m3", "Nm3", "dm3", "gallons",
    // Boolean
    "bool", "bool_yes_no", "bool_on_off",
];

pub(crate) const UNIT_CHECKED_PANEL_KINDS: &[&str] = &[
    "stat",
    "singlestat",
    "graph",
    "table-with-time",
    "timeseries",
    "gauge",
];

#[derive(Deserialize, Default)]
#[serde(default)]
struct StatOptions {
    #[serde(rename = "reduceOptions")]
    reduce_options: ReduceOptions,
}

// Numeric fields are selected with an empty string. Any other selector means
// the stat reduces over a named, non-numeric set.
#[derive(Deserialize, Default)]
#[serde(default)]
struct ReduceOptions {
    fields: String,
}

pub fn rule() -> Rule {
    Rule::Panel {
        name: "panel-units-rule",
        description: "Checks that each panel has valid units defined.",
        severity: Severity::Error,
        check: check_panel_units,
    }
}

fn check_panel_units(_dashboard: &Dashboard, panel: &Panel) -> Vec<RuleResult> {
    if !UNIT_CHECKED_PANEL_KINDS.contains(&panel.kind.as_str()) {
        return Vec::new();
    }

    // stat panels reducing over non-numeric fields carry no unit to check
    if panel.kind == "stat" {
        if let Ok(options) = serde_json::from_value::<StatOptions>(panel.options.clone()) {
            if !options.reduce_options.fields.is_empty() {
                return Vec::new();
            }
        }
    }

    // a configured value mapping supersedes numeric unit semantics
    let mappings = match value_mappings(panel) {
        Ok(mappings) => mappings,
        Err(error) => return vec![RuleResult::error(error.to_string())],
    };
    if mappings.is_some() {
        return Vec::new();
    }

    let unit = configured_unit(panel);
    if !unit.is_empty() && VALID_UNITS.contains(&unit) {
        return Vec::new();
    }

    vec![RuleResult::error(format!(
        "has no or invalid units defined: '{}'",
        unit
    ))]
}

/// Resolves the configured unit: the first non-empty "unit" override property
/// wins, otherwise the field-config default applies.
fn configured_unit(panel: &Panel) -> &str {
    for override_entry in &panel.field_config.overrides {
        for property in &override_entry.properties {
            if property.id == "unit" {
                if let OverrideValue::Text(unit) = &property.value {
                    if !unit.is_empty() {
                        return unit;
                    }
                }
            }
        }
    }
    &panel.field_config.defaults.unit
}

/// Resolves the panel's value mappings: the first non-absent "mappings"
/// override property wins, otherwise the raw defaults payload is decoded.
fn value_mappings(panel: &Panel) -> Result<Option<serde_json::Value>, serde_json::Error> {
    for override_entry in &panel.field_config.overrides {
        for property in &override_entry.properties {
            if property.id == "mappings" && property.value != OverrideValue::Absent {
                return Ok(Some(property.value.to_value()));
            }
        }
    }
    if let Some(raw) = &panel.field_config.defaults.mappings {
        let mappings: serde_json::Value = serde_json::from_str(raw.get())?;
        if !mappings.is_null() {
            return Ok(Some(mappings));
        }
    }
    Ok(None)
}
