//! User-facing text in the two supported languages.
//!
//! The root search itself never sees a `Locale`; only the prompt, report and
//! plot layers look messages up here.

use clap::ValueEnum;
use serde::Deserialize;

use crate::RootError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
pub enum Locale {
  #[default]
  #[value(name = "en")]
  #[serde(rename = "en")]
  English,
  #[value(name = "fr")]
  #[serde(rename = "fr")]
  French,
}

impl Locale {
  /// Map the menu choice typed at the language prompt.
  pub fn from_menu_choice(input: &str) -> Option<Self> {
    match input.trim() {
      "1" => Some(Locale::English),
      "2" => Some(Locale::French),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
  SelectLanguage,
  DegreePrompt,
  DegreeMustBePositive,
  EnterInteger,
  EnterCoefficients,
  CoefficientsEcho,
  RootsFound,
  NoRootsFound,
  InvalidPolynomial,
  PlotTitle,
  CurveLabel,
  RootsLabel,
  PlotSaved,
}

const MESSAGES: &[(Locale, Message, &str)] = &[
  (
    Locale::English,
    Message::SelectLanguage,
    "Type:\n1: English\n2: French",
  ),
  (
    Locale::English,
    Message::DegreePrompt,
    "What is the degree of your polynomial: ",
  ),
  (
    Locale::French,
    Message::DegreePrompt,
    "Quel est le degré de votre polynôme : ",
  ),
  (
    Locale::English,
    Message::DegreeMustBePositive,
    "The degree must be positive",
  ),
  (
    Locale::French,
    Message::DegreeMustBePositive,
    "Le degré doit être positif",
  ),
  (Locale::English, Message::EnterInteger, "Please enter an integer"),
  (
    Locale::French,
    Message::EnterInteger,
    "Veuillez entrer un nombre entier",
  ),
  (
    Locale::English,
    Message::EnterCoefficients,
    "Please enter the coefficients one by one in order:",
  ),
  (
    Locale::French,
    Message::EnterCoefficients,
    "Veuillez entrer les coefficients un par un dans l'ordre :",
  ),
  (Locale::English, Message::CoefficientsEcho, "Coefficients:"),
  (Locale::French, Message::CoefficientsEcho, "Coefficients :"),
  (Locale::English, Message::RootsFound, "Rational roots found:"),
  (
    Locale::French,
    Message::RootsFound,
    "Racines rationnelles trouvées :",
  ),
  (Locale::English, Message::NoRootsFound, "No rational roots found."),
  (
    Locale::French,
    Message::NoRootsFound,
    "Aucune racine rationnelle trouvée.",
  ),
  (
    Locale::English,
    Message::InvalidPolynomial,
    "The polynomial must have a non-zero leading coefficient.",
  ),
  (
    Locale::French,
    Message::InvalidPolynomial,
    "Le polynôme doit avoir un coefficient dominant non nul.",
  ),
  (Locale::English, Message::PlotTitle, "Polynomial Plot"),
  (Locale::French, Message::PlotTitle, "Représentation du polynôme"),
  (Locale::English, Message::CurveLabel, "Polynomial"),
  (Locale::French, Message::CurveLabel, "Polynôme"),
  (Locale::English, Message::RootsLabel, "Roots"),
  (Locale::French, Message::RootsLabel, "Racines"),
  (Locale::English, Message::PlotSaved, "Plot written to"),
  (Locale::French, Message::PlotSaved, "Graphique enregistré dans"),
];

/// Look up the text for `message` in `locale`.
pub fn text(locale: Locale, message: Message) -> &'static str {
  MESSAGES
    .iter()
    .find(|(l, m, _)| *l == locale && *m == message)
    .map(|(_, _, text)| *text)
    .unwrap_or("")
}

/// Prompt for the coefficient at 1-based `index`, multiplying `x^power`.
pub fn coefficient_prompt(index: usize, power: usize) -> String {
  format!("coefficient {index} (x^{power}): ")
}

/// Localized description of a root search failure.
pub fn error_text(locale: Locale, err: &RootError) -> String {
  match err {
    RootError::InvalidPolynomial => {
      text(locale, Message::InvalidPolynomial).to_string()
    }
    other => other.to_string(),
  }
}
