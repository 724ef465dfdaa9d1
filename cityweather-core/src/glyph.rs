/// Icon shown next to a report, keyed by condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Drizzle,
    Rain,
    Wind,
    Snow,
    Clouds,
    Haze,
    PartlyCloudy,
    Sunny,
    Thunderstorm,
    ClearNight,
    Unknown,
}

impl Glyph {
    /// Font Awesome class used by the web rendition of the widget.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Glyph::Drizzle => "fas fa-cloud-rain",
            Glyph::Rain => "fas fa-cloud-showers-heavy",
            Glyph::Wind => "fas fa-wind",
            Glyph::Snow => "fas fa-snowflake",
            Glyph::Clouds => "fas fa-cloud",
            Glyph::Haze => "fas fa-smog",
            Glyph::PartlyCloudy => "fas fa-cloud-sun",
            Glyph::Sunny => "fas fa-sun",
            Glyph::Thunderstorm => "fas fa-bolt",
            Glyph::ClearNight => "fas fa-moon",
            Glyph::Unknown => "fas fa-question",
        }
    }

    /// Terminal counterpart of [`Glyph::icon_class`].
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Drizzle => "🌦",
            Glyph::Rain => "🌧",
            Glyph::Wind => "💨",
            Glyph::Snow => "❄",
            Glyph::Clouds => "☁",
            Glyph::Haze => "🌫",
            Glyph::PartlyCloudy => "⛅",
            Glyph::Sunny => "☀",
            Glyph::Thunderstorm => "⚡",
            Glyph::ClearNight => "🌙",
            Glyph::Unknown => "?",
        }
    }
}

/// Total mapping from condition category to glyph. Matching ignores case.
///
/// `clear` deliberately shares the snow glyph.
pub fn glyph_for(category: Option<&str>) -> Glyph {
    let Some(category) = category else {
        return Glyph::Unknown;
    };

    match category.to_lowercase().as_str() {
        "drizzle" => Glyph::Drizzle,
        "rain" => Glyph::Rain,
        "wind" => Glyph::Wind,
        "snowflake" | "clear" | "snow" => Glyph::Snow,
        "clouds" | "cloudy" => Glyph::Clouds,
        "haze" | "fog" | "mist" => Glyph::Haze,
        "partly-cloudy" => Glyph::PartlyCloudy,
        "sunny" => Glyph::Sunny,
        "thunderstorm" => Glyph::Thunderstorm,
        "clear-night" => Glyph::ClearNight,
        _ => Glyph::Unknown,
    }
}
