use chrono::{DateTime, Duration, Utc};

/// Continuous mapping from a timestamp domain to a pixel range, clamped so
/// out-of-domain inputs saturate at the range endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeScale {
    domain: (DateTime<Utc>, DateTime<Utc>),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, t: DateTime<Utc>) -> f64 {
        let span = (self.domain.1 - self.domain.0).num_milliseconds() as f64;
        if span == 0.0 {
            // Degenerate domain: every input collapses to the range midpoint.
            return (self.range.0 + self.range.1) / 2.0;
        }
        let t = ((t - self.domain.0).num_milliseconds() as f64 / span).clamp(0.0, 1.0);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// `count + 1` evenly spaced instants across the domain, endpoints
    /// included.
    pub fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        if count == 0 {
            return vec![self.domain.0];
        }
        let span_ms = (self.domain.1 - self.domain.0).num_milliseconds();
        (0..=count)
            .map(|i| {
                let offset = span_ms as f64 * i as f64 / count as f64;
                self.domain.0 + Duration::milliseconds(offset as i64)
            })
            .collect()
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Discrete mapping from an ordered category set to evenly spaced bands.
/// Inner and outer padding share one fraction, bands are centered in the
/// range, and step/start/bandwidth are aligned to whole pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let (r0, r1) = range;
        let step = ((r1 - r0) / 1.0_f64.max(n - padding + padding * 2.0)).floor();
        let start = (r0 + (r1 - r0 - step * (n - padding)) * 0.5).round();
        let bandwidth = (step * (1.0 - padding)).round();
        Self {
            domain,
            range,
            start,
            step,
            bandwidth,
        }
    }

    /// Band start offset for `key`, `None` for keys outside the domain.
    pub fn scale(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|d| d == key)
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 3, 17, h, m, 0).unwrap()
    }

    #[test]
    fn test_time_scale_maps_domain_to_range() {
        let x = TimeScale::new((at(9, 0), at(10, 0)), (0.0, 1200.0));
        assert_eq!(x.scale(at(9, 0)), 0.0);
        assert_eq!(x.scale(at(10, 0)), 1200.0);
        assert_eq!(x.scale(at(9, 30)), 600.0);
    }

    #[test]
    fn test_time_scale_clamps_out_of_domain() {
        let x = TimeScale::new((at(9, 0), at(10, 0)), (0.0, 1200.0));
        assert_eq!(x.scale(at(8, 0)), 0.0);
        assert_eq!(x.scale(at(11, 0)), 1200.0);
    }

    #[test]
    fn test_time_scale_monotonic() {
        let x = TimeScale::new((at(9, 0), at(10, 0)), (0.0, 1200.0));
        let mut last = f64::NEG_INFINITY;
        for m in [0, 5, 12, 12, 30, 59] {
            let v = x.scale(at(9, m));
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_time_scale_degenerate_domain_hits_midpoint() {
        let x = TimeScale::new((at(9, 0), at(9, 0)), (0.0, 1200.0));
        assert_eq!(x.scale(at(9, 0)), 600.0);
        assert_eq!(x.scale(at(12, 0)), 600.0);
    }

    #[test]
    fn test_time_scale_ticks_cover_domain() {
        let x = TimeScale::new((at(9, 0), at(10, 0)), (0.0, 1200.0));
        let ticks = x.ticks(10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0], at(9, 0));
        assert_eq!(ticks[10], at(10, 0));
        assert_eq!(ticks[5], at(9, 30));
    }

    #[test]
    fn test_band_scale_two_rows() {
        let y = BandScale::new(vec!["1".into(), "2".into()], (0.0, 360.0), 0.2);
        // step = floor(360 / 2.2), start and bandwidth rounded from there
        assert_eq!(y.scale("1"), Some(33.0));
        assert_eq!(y.scale("2"), Some(196.0));
        assert_eq!(y.bandwidth(), 130.0);
    }

    #[test]
    fn test_band_scale_single_row() {
        let y = BandScale::new(vec!["1".into()], (0.0, 360.0), 0.2);
        assert_eq!(y.scale("1"), Some(60.0));
        assert_eq!(y.bandwidth(), 240.0);
    }

    #[test]
    fn test_band_scale_unknown_key() {
        let y = BandScale::new(vec!["1".into(), "2".into()], (0.0, 360.0), 0.2);
        assert_eq!(y.scale("7"), None);
    }

    #[test]
    fn test_band_scale_bands_fit_range() {
        let y = BandScale::new(
            vec!["1".into(), "2".into(), "3".into(), "4".into(), "5".into()],
            (0.0, 360.0),
            0.2,
        );
        let last = y.scale("5").unwrap();
        assert!(y.scale("1").unwrap() >= 0.0);
        assert!(last + y.bandwidth() <= 360.0);
    }
}
