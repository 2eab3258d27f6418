//! Dual-axis price/return chart rendering

use crate::error::{FinanceError, Result};
use crate::series::PriceSeries;
use plotters::prelude::*;
use plotters::style::FontTransform;

/// A rendered chart artifact, handed to the caller for display
#[derive(Debug, Clone)]
pub struct Chart {
    pub ticker: String,
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Render a close-price line (left axis) and daily-return line (right
/// axis) over a shared date axis, returning PNG bytes.
pub fn render_price_chart(series: &PriceSeries, width: u32, height: u32) -> Result<Vec<u8>> {
    if series.len() < 2 {
        return Err(FinanceError::ChartError(format!(
            "Not enough price data for {} (minimum 2 bars required)",
            series.ticker
        )));
    }

    let safe_ticker: String = series
        .ticker
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let temp_file = std::env::temp_dir().join(format!(
        "finboard_chart_{}_{}.png",
        safe_ticker,
        std::process::id()
    ));

    {
        let root = BitMapBackend::new(&temp_file, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| FinanceError::ChartError(format!("Failed to fill canvas: {e}")))?;

        let bars = &series.bars;
        let x_min = bars[0].date;
        let x_max = bars[bars.len() - 1].date;

        let min_close = bars.iter().map(|b| b.close).fold(f64::INFINITY, f64::min);
        let max_close = bars
            .iter()
            .map(|b| b.close)
            .fold(f64::NEG_INFINITY, f64::max);
        let close_pad = ((max_close - min_close) * 0.1).max(1e-8);

        let returns: Vec<f64> = bars.iter().filter_map(|b| b.daily_return).collect();
        let min_return = returns.iter().copied().fold(f64::INFINITY, f64::min);
        let max_return = returns.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (min_return, max_return) = if returns.is_empty() {
            (-1.0, 1.0)
        } else {
            (min_return, max_return)
        };
        let return_pad = ((max_return - min_return) * 0.1).max(1e-8);

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("{} Historical Data and Daily Returns", series.ticker),
                ("sans-serif", 24.0).into_font(),
            )
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .right_y_label_area_size(55)
            .build_cartesian_2d(
                x_min..x_max,
                (min_close - close_pad)..(max_close + close_pad),
            )
            .map_err(|e| FinanceError::ChartError(format!("Failed to build chart: {e}")))?
            .set_secondary_coord(
                x_min..x_max,
                (min_return - return_pad)..(max_return + return_pad),
            );

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(10)
            .x_label_formatter(&|d| d.format("%m-%d").to_string())
            .x_label_style(
                ("sans-serif", 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .x_desc("Date")
            .y_desc("Price")
            .axis_desc_style(("sans-serif", 14))
            .draw()
            .map_err(|e| FinanceError::ChartError(format!("Failed to draw mesh: {e}")))?;

        chart
            .configure_secondary_axes()
            .y_desc("Daily Return (%)")
            .draw()
            .map_err(|e| FinanceError::ChartError(format!("Failed to draw secondary axis: {e}")))?;

        chart
            .draw_series(LineSeries::new(
                bars.iter().map(|b| (b.date, b.close)),
                &BLUE,
            ))
            .map_err(|e| FinanceError::ChartError(format!("Failed to draw price series: {e}")))?;

        chart
            .draw_secondary_series(LineSeries::new(
                bars.iter().filter_map(|b| b.daily_return.map(|r| (b.date, r))),
                &RED,
            ))
            .map_err(|e| FinanceError::ChartError(format!("Failed to draw return series: {e}")))?;

        root.present()
            .map_err(|e| FinanceError::ChartError(format!("Failed to render chart: {e}")))?;
    }

    let png = std::fs::read(&temp_file)
        .map_err(|e| FinanceError::ChartError(format!("Failed to read chart file: {e}")))?;
    let _ = std::fs::remove_file(&temp_file);

    Ok(png)
}
