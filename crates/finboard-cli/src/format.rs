//! Tabular output for price series

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use finboard_finance::PriceSeries;

/// Build the OHLCV table shown by the prices command
pub fn price_table(series: &PriceSeries) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Date",
        "Open",
        "High",
        "Low",
        "Close",
        "Volume",
        "Daily Return (%)",
    ]);

    for bar in &series.bars {
        table.add_row(vec![
            bar.date.to_string(),
            format!("{:.2}", bar.open),
            format!("{:.2}", bar.high),
            format!("{:.2}", bar.low),
            format!("{:.2}", bar.close),
            bar.volume.to_string(),
            bar.daily_return
                .map_or_else(|| "-".to_string(), |r| format!("{r:+.2}")),
        ]);
    }

    table
}
