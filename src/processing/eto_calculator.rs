//! Simplified FAO Penman-Monteith reference evapotranspiration.
//!
//! Each intermediate is rounded to 2 decimals before it feeds the next step,
//! so results line up with the station's published daily sheets.

use crate::processing::utils::{finite, round2};
use crate::types::config::EtoParameters;
use crate::types::records::daily::{DailyRecord, EnrichedDailyRecord};

/// Saturation vapour pressure es(T) in kPa, unrounded.
pub fn saturation_vapor_pressure(mean_temperature: f64) -> f64 {
    0.6108 * ((17.27 * mean_temperature) / (mean_temperature + 237.3)).exp()
}

/// Slope Δ of the saturation vapour pressure curve in kPa/°C, unrounded.
pub fn vapor_pressure_slope(saturation_vapor_pressure: f64, mean_temperature: f64) -> f64 {
    (4098.0 * saturation_vapor_pressure) / (mean_temperature + 237.3).powi(2)
}

/// Daily inputs of the ETo equation, already rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EtoInputs {
    pub mean_temperature: f64,
    pub saturation_vapor_pressure: f64,
    pub actual_vapor_pressure: f64,
    pub net_radiation: f64,
    pub vapor_pressure_slope: f64,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EtoCalculator {
    params: EtoParameters,
}

impl EtoCalculator {
    pub fn new(params: EtoParameters) -> Self {
        Self { params }
    }

    /// Adds the derived quantities to every day. Row count and order are kept.
    pub fn enrich(&self, daily: &[DailyRecord]) -> Vec<EnrichedDailyRecord> {
        daily.iter().map(|day| self.enrich_day(day)).collect()
    }

    pub fn enrich_day(&self, day: &DailyRecord) -> EnrichedDailyRecord {
        let mean_temperature = midpoint(day.temperature_max, day.temperature_min);
        let mean_humidity = midpoint(day.humidity_max, day.humidity_min);

        let es = mean_temperature
            .and_then(|t| finite(saturation_vapor_pressure(t)))
            .map(round2);
        let ea = es
            .zip(mean_humidity)
            .map(|(es, ur)| round2(es * ur / 100.0));
        let rn = day
            .radiation_total
            .map(|r| round2(self.params.net_radiation_fraction * r));
        let delta = es
            .zip(mean_temperature)
            .and_then(|(es, t)| finite(vapor_pressure_slope(es, t)))
            .map(round2);

        let eto = (|| {
            Some(EtoInputs {
                mean_temperature: mean_temperature?,
                saturation_vapor_pressure: es?,
                actual_vapor_pressure: ea?,
                net_radiation: rn?,
                vapor_pressure_slope: delta?,
                wind_speed: day.wind_speed?,
            })
        })()
        .and_then(|inputs| self.reference_eto(&inputs));

        EnrichedDailyRecord {
            daily: day.clone(),
            mean_temperature,
            mean_humidity,
            saturation_vapor_pressure: es,
            actual_vapor_pressure: ea,
            net_radiation: rn,
            vapor_pressure_slope: delta,
            eto,
        }
    }

    /// ETo in mm/day rounded to 2 decimals, `None` if the equation is not finite.
    pub fn reference_eto(&self, inputs: &EtoInputs) -> Option<f64> {
        let EtoParameters {
            soil_heat_flux: g,
            psychrometric_constant: gamma,
            ..
        } = self.params;
        let EtoInputs {
            mean_temperature: t,
            saturation_vapor_pressure: es,
            actual_vapor_pressure: ea,
            net_radiation: rn,
            vapor_pressure_slope: delta,
            wind_speed: u2,
        } = *inputs;

        let radiation_term = 0.408 * delta * (rn - g);
        let aerodynamic_term = gamma * (900.0 / (t + 273.0)) * u2 * (es - ea);
        let denominator = delta + gamma * (1.0 + 0.34 * u2);

        finite((radiation_term + aerodynamic_term) / denominator).map(round2)
    }
}

fn midpoint(max: Option<f64>, min: Option<f64>) -> Option<f64> {
    max.zip(min).map(|(max, min)| round2((max + min) / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reference_day() -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            temperature_max: Some(30.0),
            temperature_min: Some(20.0),
            humidity_max: Some(70.0),
            humidity_min: Some(50.0),
            wind_speed: Some(2.0),
            wind_direction: Some(90.0),
            wind_gust: Some(5.1),
            radiation_total: Some(20.0),
            rainfall_total: Some(0.0),
        }
    }

    #[test]
    fn reference_day_intermediates_and_eto() {
        let enriched = EtoCalculator::default().enrich_day(&reference_day());

        assert_eq!(enriched.mean_temperature, Some(25.0));
        assert_eq!(enriched.mean_humidity, Some(60.0));
        assert_eq!(enriched.saturation_vapor_pressure, Some(3.17));
        assert_eq!(enriched.actual_vapor_pressure, Some(1.9));
        assert_eq!(enriched.net_radiation, Some(10.0));
        assert_eq!(enriched.vapor_pressure_slope, Some(0.19));
        assert_eq!(enriched.eto, Some(4.25));
    }

    #[test]
    fn saturation_vapor_pressure_matches_tables() {
        assert_eq!(round2(saturation_vapor_pressure(25.0)), 3.17);
        assert_eq!(round2(saturation_vapor_pressure(12.3)), 1.43);
    }

    #[test]
    fn missing_inputs_propagate_to_eto() {
        let calculator = EtoCalculator::default();
        let blank: [fn(&mut DailyRecord); 4] = [
            |d: &mut DailyRecord| d.temperature_max = None,
            |d: &mut DailyRecord| d.humidity_min = None,
            |d: &mut DailyRecord| d.radiation_total = None,
            |d: &mut DailyRecord| d.wind_speed = None,
        ];

        for clear in blank {
            let mut day = reference_day();
            clear(&mut day);
            let enriched = calculator.enrich_day(&day);
            assert_eq!(enriched.eto, None, "ETo should be missing for {:?}", day);
        }
    }

    #[test]
    fn missing_humidity_keeps_temperature_terms() {
        let mut day = reference_day();
        day.humidity_max = None;
        let enriched = EtoCalculator::default().enrich_day(&day);

        assert_eq!(enriched.mean_humidity, None);
        assert_eq!(enriched.actual_vapor_pressure, None);
        assert_eq!(enriched.saturation_vapor_pressure, Some(3.17));
        assert_eq!(enriched.vapor_pressure_slope, Some(0.19));
    }

    #[test]
    fn zero_denominator_is_missing_not_infinite() {
        let calculator = EtoCalculator::new(
            EtoParameters::builder().psychrometric_constant(0.0).build(),
        );
        let inputs = EtoInputs {
            mean_temperature: 25.0,
            saturation_vapor_pressure: 3.17,
            actual_vapor_pressure: 1.9,
            net_radiation: 10.0,
            vapor_pressure_slope: 0.0,
            wind_speed: 2.0,
        };
        assert_eq!(calculator.reference_eto(&inputs), None);
    }

    #[test]
    fn keeps_row_count_and_order() {
        let mut later = reference_day();
        later.date = NaiveDate::from_ymd_opt(2023, 1, 16).unwrap();
        later.wind_speed = None;
        let daily = vec![reference_day(), later.clone()];

        let enriched = EtoCalculator::default().enrich(&daily);
        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].daily, daily[0]);
        assert_eq!(enriched[1].daily, later);
        assert_eq!(enriched[1].eto, None);
    }
}
