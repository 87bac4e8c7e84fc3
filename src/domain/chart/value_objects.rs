use derive_more::Display;
use strum::EnumIter;
use time::Date;

use crate::domain::stock::ChangeTone;

/// Value Object - how the price history is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum ChartRenderer {
    #[default]
    #[display(fmt = "Line")]
    Line,
    #[display(fmt = "Candlestick")]
    Candlestick,
}

/// Value Object - drawing surface in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 400.0,
            padding_left: 64.0,
            padding_right: 16.0,
            padding_top: 16.0,
            padding_bottom: 32.0,
        }
    }
}

impl PlotArea {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.padding_left - self.padding_right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.padding_top - self.padding_bottom).max(0.0)
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.padding_bottom
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// One day of price data in chart form
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: Date,
    pub label: String,
    pub open: f64,
    pub close: f64,
}

impl ChartPoint {
    pub fn tone(&self) -> ChangeTone {
        ChangeTone::of(self.close - self.open)
    }
}

/// Value Object - vertical price range with a little headroom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    pub min: f64,
    pub max: f64,
}

impl PriceScale {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Price → y coordinate inside `area`, higher prices nearer the top
    pub fn y(&self, price: f64, area: &PlotArea) -> f64 {
        let span = self.span();
        if span <= f64::EPSILON {
            return area.padding_top + area.inner_height() / 2.0;
        }
        area.bottom() - (price - self.min) / span * area.inner_height()
    }
}
