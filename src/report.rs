//! Short human-readable weather summary
//!
//! Renders the handful of lines printed by `yaweather report`.

use crate::data::Weather;

/// Renders the current conditions as a short multi-line report
pub fn mini_report(weather: &Weather) -> String {
    let fact = &weather.fact;

    format!(
        "Сегодня {}\nТемпература {}°C\nОщущается как {}°C\nПорывы ветра до {:.1} м/с\n",
        fact.condition().description(),
        fact.temp,
        fact.feels_like,
        fact.wind_gust
    )
}

/// Renders the per-part forecast, one line per part of day
pub fn forecast_lines(weather: &Weather) -> Vec<String> {
    weather
        .forecast
        .parts
        .iter()
        .map(|part| {
            format!(
                "{}: {}..{}°C, {}, осадки {}%",
                part.part_name().description(),
                part.temp_min,
                part.temp_max,
                part.condition().description(),
                part.prec_prob
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Fact, Forecast, Part};

    fn sample() -> Weather {
        Weather {
            fact: Fact {
                temp: -3,
                feels_like: -8,
                condition: "overcast".to_string(),
                wind_gust: 8.1,
                ..Default::default()
            },
            forecast: Forecast {
                parts: vec![Part {
                    part_name: "night".to_string(),
                    temp_min: -6,
                    temp_max: -3,
                    condition: "light-snow".to_string(),
                    prec_prob: 40,
                    ..Default::default()
                }],
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_mini_report() {
        let report = mini_report(&sample());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Сегодня пасмурно",
                "Температура -3°C",
                "Ощущается как -8°C",
                "Порывы ветра до 8.1 м/с",
            ]
        );
    }

    #[test]
    fn test_mini_report_unknown_condition() {
        let mut weather = sample();
        weather.fact.condition = "dust-storm".to_string();

        assert!(mini_report(&weather).starts_with("Сегодня неизвестно"));
    }

    #[test]
    fn test_mini_report_ends_with_newline() {
        let report = mini_report(&sample());
        assert!(report.ends_with("м/с\n"));
        assert_eq!(report.lines().count(), 4);
    }

    #[test]
    fn test_forecast_lines() {
        let lines = forecast_lines(&sample());
        assert_eq!(lines, vec!["ночь: -6..-3°C, небольшой снег, осадки 40%"]);
    }
}
