//! Typed views over the coded string fields of the weather payload
//!
//! The service reports conditions, wind directions and the like as short
//! string codes. Each enum here parses its code leniently: anything the
//! service adds later maps to `Unknown` instead of failing.

/// Weather condition reported for the current moment or a part of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Clear,
    PartlyCloudy,
    Cloudy,
    Overcast,
    Drizzle,
    LightRain,
    Rain,
    ModerateRain,
    HeavyRain,
    ContinuousHeavyRain,
    Showers,
    WetSnow,
    LightSnow,
    Snow,
    SnowShowers,
    Hail,
    Thunderstorm,
    ThunderstormWithRain,
    ThunderstormWithHail,
    Unknown,
}

impl Condition {
    /// Parse a condition code such as `partly-cloudy`
    pub fn from_code(code: &str) -> Self {
        match code {
            "clear" => Self::Clear,
            "partly-cloudy" => Self::PartlyCloudy,
            "cloudy" => Self::Cloudy,
            "overcast" => Self::Overcast,
            "drizzle" => Self::Drizzle,
            "light-rain" => Self::LightRain,
            "rain" => Self::Rain,
            "moderate-rain" => Self::ModerateRain,
            "heavy-rain" => Self::HeavyRain,
            "continuous-heavy-rain" => Self::ContinuousHeavyRain,
            "showers" => Self::Showers,
            "wet-snow" => Self::WetSnow,
            "light-snow" => Self::LightSnow,
            "snow" => Self::Snow,
            "snow-showers" => Self::SnowShowers,
            "hail" => Self::Hail,
            "thunderstorm" => Self::Thunderstorm,
            "thunderstorm-with-rain" => Self::ThunderstormWithRain,
            "thunderstorm-with-hail" => Self::ThunderstormWithHail,
            _ => Self::Unknown,
        }
    }

    /// Human-readable description, in Russian to match the service locale
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "ясно",
            Self::PartlyCloudy => "малооблачно",
            Self::Cloudy => "облачно с прояснениями",
            Self::Overcast => "пасмурно",
            Self::Drizzle => "морось",
            Self::LightRain => "небольшой дождь",
            Self::Rain => "дождь",
            Self::ModerateRain => "умеренно сильный дождь",
            Self::HeavyRain => "сильный дождь",
            Self::ContinuousHeavyRain => "длительный сильный дождь",
            Self::Showers => "ливень",
            Self::WetSnow => "дождь со снегом",
            Self::LightSnow => "небольшой снег",
            Self::Snow => "снег",
            Self::SnowShowers => "снегопад",
            Self::Hail => "град",
            Self::Thunderstorm => "гроза",
            Self::ThunderstormWithRain => "дождь с грозой",
            Self::ThunderstormWithHail => "гроза с градом",
            Self::Unknown => "неизвестно",
        }
    }
}

/// Wind direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindDirection {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    Calm,
    Unknown,
}

impl WindDirection {
    pub fn from_code(code: &str) -> Self {
        match code {
            "nw" => Self::NorthWest,
            "n" => Self::North,
            "ne" => Self::NorthEast,
            "e" => Self::East,
            "se" => Self::SouthEast,
            "s" => Self::South,
            "sw" => Self::SouthWest,
            "w" => Self::West,
            // Calm has been seen with both a Latin and a Cyrillic "c"
            "c" | "с" => Self::Calm,
            _ => Self::Unknown,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::NorthWest => "северо-западный",
            Self::North => "северный",
            Self::NorthEast => "северо-восточный",
            Self::East => "восточный",
            Self::SouthEast => "юго-восточный",
            Self::South => "южный",
            Self::SouthWest => "юго-западный",
            Self::West => "западный",
            Self::Calm => "штиль",
            Self::Unknown => "неизвестно",
        }
    }
}

/// Light or dark time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Daytime {
    Day,
    Night,
    Unknown,
}

impl Daytime {
    pub fn from_code(code: &str) -> Self {
        match code {
            "d" => Self::Day,
            "n" => Self::Night,
            _ => Self::Unknown,
        }
    }
}

/// Season at the location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Autumn,
    Winter,
    Spring,
    Unknown,
}

impl Season {
    pub fn from_code(code: &str) -> Self {
        match code {
            "summer" => Self::Summer,
            "autumn" => Self::Autumn,
            "winter" => Self::Winter,
            "spring" => Self::Spring,
            _ => Self::Unknown,
        }
    }
}

/// Part of day a forecast entry covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartName {
    Night,
    Morning,
    Day,
    Evening,
    Unknown,
}

impl PartName {
    pub fn from_code(code: &str) -> Self {
        match code {
            "night" => Self::Night,
            "morning" => Self::Morning,
            "day" => Self::Day,
            "evening" => Self::Evening,
            _ => Self::Unknown,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Night => "ночь",
            Self::Morning => "утро",
            Self::Day => "день",
            Self::Evening => "вечер",
            Self::Unknown => "неизвестно",
        }
    }
}

/// Moon phase derived from the numeric moon code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    FullMoon,
    Waning,
    LastQuarter,
    NewMoon,
    Waxing,
    FirstQuarter,
    Unknown,
}

impl MoonPhase {
    /// Map a moon code (0-15) to its phase
    ///
    /// - 0: full moon
    /// - 1-3, 5-7: waning
    /// - 4: last quarter
    /// - 8: new moon
    /// - 9-11, 13-15: waxing
    /// - 12: first quarter
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::FullMoon,
            1..=3 | 5..=7 => Self::Waning,
            4 => Self::LastQuarter,
            8 => Self::NewMoon,
            9..=11 | 13..=15 => Self::Waxing,
            12 => Self::FirstQuarter,
            _ => Self::Unknown,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::FullMoon => "полнолуние",
            Self::Waning => "убывающая луна",
            Self::LastQuarter => "последняя четверть",
            Self::NewMoon => "новолуние",
            Self::Waxing => "растущая луна",
            Self::FirstQuarter => "первая четверть",
            Self::Unknown => "неизвестно",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_from_code() {
        assert_eq!(Condition::from_code("clear"), Condition::Clear);
        assert_eq!(Condition::from_code("partly-cloudy"), Condition::PartlyCloudy);
        assert_eq!(Condition::from_code("overcast"), Condition::Overcast);
        assert_eq!(
            Condition::from_code("continuous-heavy-rain"),
            Condition::ContinuousHeavyRain
        );
        assert_eq!(Condition::from_code("snow-showers"), Condition::SnowShowers);
        assert_eq!(
            Condition::from_code("thunderstorm-with-rain"),
            Condition::ThunderstormWithRain
        );
    }

    #[test]
    fn test_condition_unknown_code() {
        assert_eq!(Condition::from_code(""), Condition::Unknown);
        assert_eq!(Condition::from_code("volcanic-ash"), Condition::Unknown);
        assert_eq!(Condition::from_code("Clear"), Condition::Unknown);
    }

    #[test]
    fn test_condition_description() {
        assert_eq!(Condition::Clear.description(), "ясно");
        assert_eq!(Condition::Cloudy.description(), "облачно с прояснениями");
        assert_eq!(Condition::WetSnow.description(), "дождь со снегом");
    }

    #[test]
    fn test_wind_direction_calm_accepts_both_scripts() {
        assert_eq!(WindDirection::from_code("c"), WindDirection::Calm);
        assert_eq!(WindDirection::from_code("с"), WindDirection::Calm);
        assert_eq!(WindDirection::from_code("x"), WindDirection::Unknown);
    }

    #[test]
    fn test_moon_phase_mapping() {
        assert_eq!(MoonPhase::from_code(0), MoonPhase::FullMoon);
        for code in [1, 2, 3, 5, 6, 7] {
            assert_eq!(MoonPhase::from_code(code), MoonPhase::Waning, "code {}", code);
        }
        assert_eq!(MoonPhase::from_code(4), MoonPhase::LastQuarter);
        assert_eq!(MoonPhase::from_code(8), MoonPhase::NewMoon);
        for code in [9, 10, 11, 13, 14, 15] {
            assert_eq!(MoonPhase::from_code(code), MoonPhase::Waxing, "code {}", code);
        }
        assert_eq!(MoonPhase::from_code(12), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::from_code(16), MoonPhase::Unknown);
        assert_eq!(MoonPhase::from_code(-1), MoonPhase::Unknown);
    }

    #[test]
    fn test_part_name_and_season() {
        assert_eq!(PartName::from_code("morning"), PartName::Morning);
        assert_eq!(PartName::Night.description(), "ночь");
        assert_eq!(Season::from_code("winter"), Season::Winter);
        assert_eq!(Season::from_code("monsoon"), Season::Unknown);
        assert_eq!(Daytime::from_code("x"), Daytime::Unknown);
    }
}
