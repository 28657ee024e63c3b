//! Price appreciation assumptions for the snowball projection

use std::fmt;
use std::str::FromStr;

/// Maps an ETF's dividend yield (percent) to an assumed annual price growth rate
///
/// The default couples the two: lower-yield funds are assumed to appreciate
/// more, `max(floor, ceiling - yield) / 100`. It is a modeling assumption,
/// not a market fact, so callers can swap it out.
#[derive(Clone, Copy)]
pub enum PriceGrowth {
    /// `max(floor_pct, ceiling_pct - yield_pct) / 100`
    YieldOffset { ceiling_pct: f64, floor_pct: f64 },
    /// Same growth for every ETF, in percent
    Fixed(f64),
    /// Dividends and contributions only
    None,
    /// Caller-supplied mapping from yield percent to an annual rate (0.05 = 5%)
    Custom(fn(f64) -> f64),
}

impl PriceGrowth {
    pub const DEFAULT_CEILING_PCT: f64 = 8.0;
    pub const DEFAULT_FLOOR_PCT: f64 = 1.0;

    /// Annual growth rate as a fraction for an ETF yielding `yield_pct`
    pub fn annual_rate(&self, yield_pct: f64) -> f64 {
        match *self {
            PriceGrowth::YieldOffset { ceiling_pct, floor_pct } => {
                floor_pct.max(ceiling_pct - yield_pct) / 100.0
            }
            PriceGrowth::Fixed(rate_pct) => rate_pct / 100.0,
            PriceGrowth::None => 0.0,
            PriceGrowth::Custom(f) => f(yield_pct),
        }
    }
}

impl Default for PriceGrowth {
    fn default() -> Self {
        PriceGrowth::YieldOffset {
            ceiling_pct: Self::DEFAULT_CEILING_PCT,
            floor_pct: Self::DEFAULT_FLOOR_PCT,
        }
    }
}

impl fmt::Debug for PriceGrowth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceGrowth::YieldOffset { ceiling_pct, floor_pct } => f
                .debug_struct("YieldOffset")
                .field("ceiling_pct", ceiling_pct)
                .field("floor_pct", floor_pct)
                .finish(),
            PriceGrowth::Fixed(rate) => f.debug_tuple("Fixed").field(rate).finish(),
            PriceGrowth::None => f.write_str("None"),
            PriceGrowth::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Parses `default`, `none`, `fixed:<pct>` and `offset:<ceiling>:<floor>`
impl FromStr for PriceGrowth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn parse_pct(v: &str) -> Result<f64, String> {
            v.parse::<f64>()
                .ok()
                .filter(|p| p.is_finite())
                .ok_or_else(|| format!("invalid percentage: {}", v))
        }

        let s = s.trim().to_ascii_lowercase();

        match s.split(':').collect::<Vec<_>>().as_slice() {
            ["default"] => Ok(PriceGrowth::default()),
            ["none"] | ["zero"] => Ok(PriceGrowth::None),
            ["fixed", pct] => Ok(PriceGrowth::Fixed(parse_pct(pct)?)),
            ["offset", ceiling, floor] => Ok(PriceGrowth::YieldOffset {
                ceiling_pct: parse_pct(ceiling)?,
                floor_pct: parse_pct(floor)?,
            }),
            _ => Err(format!(
                "unknown growth policy '{}' (expected default, none, fixed:<pct> or offset:<ceiling>:<floor>)",
                s
            )),
        }
    }
}
