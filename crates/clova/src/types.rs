/// Recognition language, serialized exactly as the CSR endpoint's `lang`
/// query value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::AsRefStr,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[default]
    #[strum(to_string = "Kor", serialize = "ko", serialize = "ko-KR")]
    Kor,
    #[strum(to_string = "Jpn", serialize = "ja", serialize = "ja-JP")]
    Jpn,
    #[strum(to_string = "Eng", serialize = "en", serialize = "en-US")]
    Eng,
    #[strum(to_string = "Chn", serialize = "zh", serialize = "zh-CN")]
    Chn,
}

impl Language {
    /// The wire value for the `lang` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Kor => "Kor",
            Language::Jpn => "Jpn",
            Language::Eng => "Eng",
            Language::Chn => "Chn",
        }
    }
}
