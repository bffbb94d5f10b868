use std::fmt::Write;

use super::scale::{BandScale, TimeScale};

const TIME_TICK_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

/// Tick marks and labels derived from one scale, plus the markup generator
/// the diagram binds into its axis mount points.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    pub ticks: Vec<Tick>,
    pub tick_size: f64,
    pub tick_padding: f64,
    range: (f64, f64),
}

impl Axis {
    /// Horizontal axis below the plot, one `HH:MM` label per tick.
    pub fn time_bottom(scale: &TimeScale) -> Self {
        let ticks = scale
            .ticks(TIME_TICK_COUNT)
            .into_iter()
            .map(|t| Tick {
                offset: scale.scale(t),
                label: t.format("%H:%M").to_string(),
            })
            .collect();
        Axis {
            orient: Orient::Bottom,
            ticks,
            tick_size: 8.0,
            tick_padding: 8.0,
            range: scale.range(),
        }
    }

    /// Vertical axis to the left of the plot, one label per row band,
    /// positioned at the band center.
    pub fn band_left(scale: &BandScale) -> Self {
        let half = scale.bandwidth() / 2.0;
        let ticks = scale
            .domain()
            .iter()
            .filter_map(|label| {
                scale.scale(label).map(|offset| Tick {
                    offset: offset + half,
                    label: label.clone(),
                })
            })
            .collect();
        Axis {
            orient: Orient::Left,
            ticks,
            tick_size: 3.0,
            tick_padding: 6.0,
            range: scale.range(),
        }
    }

    /// Markup for one axis: a domain path plus a `g.tick` per tick mark.
    /// The diagram overwrites each mount point's contents with this string
    /// on every render pass.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let (r0, r1) = self.range;
        let size = self.tick_size;
        let label_offset = self.tick_size + self.tick_padding;
        match self.orient {
            Orient::Bottom => {
                let _ = write!(
                    out,
                    r#"<path class="domain" stroke="currentColor" fill="none" d="M{r0},{size}V0H{r1}V{size}"></path>"#
                );
                for tick in &self.ticks {
                    let _ = write!(
                        out,
                        concat!(
                            r#"<g class="tick" transform="translate({x}, 0)">"#,
                            r#"<line stroke="currentColor" y2="{size}"></line>"#,
                            r#"<text fill="currentColor" y="{y}" dy="0.71em" text-anchor="middle">{label}</text>"#,
                            "</g>"
                        ),
                        x = tick.offset,
                        size = size,
                        y = label_offset,
                        label = tick.label,
                    );
                }
            }
            Orient::Left => {
                let _ = write!(
                    out,
                    r#"<path class="domain" stroke="currentColor" fill="none" d="M-{size},{r0}H0V{r1}H-{size}"></path>"#
                );
                for tick in &self.ticks {
                    let _ = write!(
                        out,
                        concat!(
                            r#"<g class="tick" transform="translate(0, {y})">"#,
                            r#"<line stroke="currentColor" x2="-{size}"></line>"#,
                            r#"<text fill="currentColor" x="-{x}" dy="0.32em" text-anchor="end">{label}</text>"#,
                            "</g>"
                        ),
                        y = tick.offset,
                        size = size,
                        x = label_offset,
                        label = tick.label,
                    );
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 3, 17, h, m, 0).unwrap()
    }

    #[test]
    fn test_time_axis_ticks_and_format() {
        let x = TimeScale::new((at(9, 0), at(10, 0)), (0.0, 1200.0));
        let axis = Axis::time_bottom(&x);

        assert_eq!(axis.orient, Orient::Bottom);
        assert_eq!(axis.ticks.len(), 11);
        assert_eq!(axis.ticks[0].label, "09:00");
        assert_eq!(axis.ticks[5].label, "09:30");
        assert_eq!(axis.ticks[10].label, "10:00");
        assert_eq!(axis.ticks[0].offset, 0.0);
        assert_eq!(axis.ticks[10].offset, 1200.0);
        assert_eq!(axis.tick_size, 8.0);
        assert_eq!(axis.tick_padding, 8.0);
    }

    #[test]
    fn test_band_axis_one_tick_per_row() {
        let y = BandScale::new(vec!["1".into(), "2".into()], (0.0, 360.0), 0.2);
        let axis = Axis::band_left(&y);

        assert_eq!(axis.orient, Orient::Left);
        assert_eq!(axis.ticks.len(), 2);
        assert_eq!(axis.ticks[0].label, "1");
        assert_eq!(axis.ticks[1].label, "2");
        // band centers: start + bandwidth / 2
        assert_eq!(axis.ticks[0].offset, 98.0);
        assert_eq!(axis.ticks[1].offset, 261.0);
        assert_eq!(axis.tick_size, 3.0);
        assert_eq!(axis.tick_padding, 6.0);
    }

    #[test]
    fn test_bottom_markup_shape() {
        let x = TimeScale::new((at(9, 0), at(10, 0)), (0.0, 1200.0));
        let markup = Axis::time_bottom(&x).to_svg();

        assert_eq!(markup.matches(r#"class="tick""#).count(), 11);
        assert_eq!(markup.matches(r#"class="domain""#).count(), 1);
        assert!(markup.contains(r#"y2="8""#));
        assert!(markup.contains(r#"y="16""#));
        assert!(markup.contains(">09:00<"));
        assert!(markup.contains(">10:00<"));
    }

    #[test]
    fn test_left_markup_shape() {
        let y = BandScale::new(vec!["1".into(), "2".into()], (0.0, 360.0), 0.2);
        let markup = Axis::band_left(&y).to_svg();

        assert_eq!(markup.matches(r#"class="tick""#).count(), 2);
        assert!(markup.contains(r#"x2="-3""#));
        assert!(markup.contains(r#"x="-9""#));
        assert!(markup.contains(r#"text-anchor="end""#));
        assert!(markup.contains(">1<"));
        assert!(markup.contains(">2<"));
    }
}
