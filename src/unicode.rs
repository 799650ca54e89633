// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Unicode classification data for the `\p{...}` and `\P{...}`
//! constructs: the general categories and the named blocks, each with
//! its designation string as the target dialect spells it.

/// A Unicode general category, including the single-letter umbrella
/// categories ("L" covers "Ll", "Lu", ...).
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GeneralCategory {
    AllControlCharacters,
    ControlCharacters,
    FormatCharacters,
    PrivateUse,
    Surrogates,
    NotAssigned,

    AllLetterCharacters,
    LetterLowercase,
    LetterModifier,
    LetterOther,
    LetterTitlecase,
    LetterUppercase,

    AllMarkCharacters,
    MarkEnclosing,
    MarkNonspacing,
    MarkSpacingCombining,

    AllNumbers,
    NumberDecimalDigit,
    NumberLetter,
    NumberOther,

    AllPunctuationCharacters,
    PunctuationClose,
    PunctuationConnector,
    PunctuationDash,
    PunctuationFinalQuote,
    PunctuationInitialQuote,
    PunctuationOpen,
    PunctuationOther,

    AllSymbols,
    SymbolCurrency,
    SymbolMath,
    SymbolModifier,
    SymbolOther,

    AllSeparatorCharacters,
    SeparatorLine,
    SeparatorParagraph,
    SeparatorSpace,
}

impl GeneralCategory {
    /// The designation as it appears between the braces of `\p{...}`.
    pub fn designation(&self) -> &'static str {
        match self {
            GeneralCategory::AllControlCharacters => "C",
            GeneralCategory::ControlCharacters => "Cc",
            GeneralCategory::FormatCharacters => "Cf",
            GeneralCategory::PrivateUse => "Co",
            GeneralCategory::Surrogates => "Cs",
            GeneralCategory::NotAssigned => "Cn",
            GeneralCategory::AllLetterCharacters => "L",
            GeneralCategory::LetterLowercase => "Ll",
            GeneralCategory::LetterModifier => "Lm",
            GeneralCategory::LetterOther => "Lo",
            GeneralCategory::LetterTitlecase => "Lt",
            GeneralCategory::LetterUppercase => "Lu",
            GeneralCategory::AllMarkCharacters => "M",
            GeneralCategory::MarkEnclosing => "Me",
            GeneralCategory::MarkNonspacing => "Mn",
            GeneralCategory::MarkSpacingCombining => "Mc",
            GeneralCategory::AllNumbers => "N",
            GeneralCategory::NumberDecimalDigit => "Nd",
            GeneralCategory::NumberLetter => "Nl",
            GeneralCategory::NumberOther => "No",
            GeneralCategory::AllPunctuationCharacters => "P",
            GeneralCategory::PunctuationClose => "Pe",
            GeneralCategory::PunctuationConnector => "Pc",
            GeneralCategory::PunctuationDash => "Pd",
            GeneralCategory::PunctuationFinalQuote => "Pf",
            GeneralCategory::PunctuationInitialQuote => "Pi",
            GeneralCategory::PunctuationOpen => "Ps",
            GeneralCategory::PunctuationOther => "Po",
            GeneralCategory::AllSymbols => "S",
            GeneralCategory::SymbolCurrency => "Sc",
            GeneralCategory::SymbolMath => "Sm",
            GeneralCategory::SymbolModifier => "Sk",
            GeneralCategory::SymbolOther => "So",
            GeneralCategory::AllSeparatorCharacters => "Z",
            GeneralCategory::SeparatorLine => "Zl",
            GeneralCategory::SeparatorParagraph => "Zp",
            GeneralCategory::SeparatorSpace => "Zs",
        }
    }
}

/// A Unicode named block, designated with the "Is" prefix, e.g.
/// `\p{IsBasicLatin}`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NamedBlock {
    AlphabeticPresentationForms,
    Arabic,
    ArabicPresentationFormsA,
    ArabicPresentationFormsB,
    Armenian,
    Arrows,
    BasicLatin,
    Bengali,
    BlockElements,
    Bopomofo,
    BopomofoExtended,
    BoxDrawing,
    BraillePatterns,
    Buhid,
    Cherokee,
    CjkCompatibility,
    CjkCompatibilityForms,
    CjkCompatibilityIdeographs,
    CjkRadicalsSupplement,
    CjkSymbolsAndPunctuation,
    CjkUnifiedIdeographs,
    CjkUnifiedIdeographsExtensionA,
    CombiningDiacriticalMarks,
    CombiningDiacriticalMarksForSymbols,
    CombiningHalfMarks,
    CombiningMarksForSymbols,
    ControlPictures,
    CurrencySymbols,
    Cyrillic,
    CyrillicSupplement,
    Devanagari,
    Dingbats,
    EnclosedAlphanumerics,
    EnclosedCjkLettersAndMonths,
    Ethiopic,
    GeneralPunctuation,
    GeometricShapes,
    Georgian,
    Greek,
    GreekAndCoptic,
    GreekExtended,
    Gujarati,
    Gurmukhi,
    HalfwidthAndFullwidthForms,
    HangulCompatibilityJamo,
    HangulJamo,
    HangulSyllables,
    Hanunoo,
    Hebrew,
    HighPrivateUseSurrogates,
    HighSurrogates,
    Hiragana,
    IdeographicDescriptionCharacters,
    IpaExtensions,
    Kanbun,
    KangxiRadicals,
    Kannada,
    Katakana,
    KatakanaPhoneticExtensions,
    Khmer,
    KhmerSymbols,
    Lao,
    Latin1Supplement,
    LatinExtendedA,
    LatinExtendedAdditional,
    LatinExtendedB,
    LetterlikeSymbols,
    Limbu,
    LowSurrogates,
    Malayalam,
    MathematicalOperators,
    MiscellaneousMathematicalSymbolsA,
    MiscellaneousMathematicalSymbolsB,
    MiscellaneousSymbols,
    MiscellaneousSymbolsAndArrows,
    MiscellaneousTechnical,
    Mongolian,
    Myanmar,
    NumberForms,
    Ogham,
    OpticalCharacterRecognition,
    Oriya,
    PhoneticExtensions,
    PrivateUse,
    PrivateUseArea,
    Runic,
    Sinhala,
    SmallFormVariants,
    SpacingModifierLetters,
    Specials,
    SuperscriptsAndSubscripts,
    SupplementalArrowsA,
    SupplementalArrowsB,
    SupplementalMathematicalOperators,
    Syriac,
    Tagalog,
    Tagbanwa,
    TaiLe,
    Tamil,
    Telugu,
    Thaana,
    Thai,
    Tibetan,
    UnifiedCanadianAboriginalSyllabics,
    VariationSelectors,
    YiRadicals,
    YiSyllables,
    YijingHexagramSymbols,
}

impl NamedBlock {
    /// The designation as it appears between the braces of `\p{...}`.
    pub fn designation(&self) -> &'static str {
        match self {
            NamedBlock::AlphabeticPresentationForms => "IsAlphabeticPresentationForms",
            NamedBlock::Arabic => "IsArabic",
            NamedBlock::ArabicPresentationFormsA => "IsArabicPresentationForms-A",
            NamedBlock::ArabicPresentationFormsB => "IsArabicPresentationForms-B",
            NamedBlock::Armenian => "IsArmenian",
            NamedBlock::Arrows => "IsArrows",
            NamedBlock::BasicLatin => "IsBasicLatin",
            NamedBlock::Bengali => "IsBengali",
            NamedBlock::BlockElements => "IsBlockElements",
            NamedBlock::Bopomofo => "IsBopomofo",
            NamedBlock::BopomofoExtended => "IsBopomofoExtended",
            NamedBlock::BoxDrawing => "IsBoxDrawing",
            NamedBlock::BraillePatterns => "IsBraillePatterns",
            NamedBlock::Buhid => "IsBuhid",
            NamedBlock::Cherokee => "IsCherokee",
            NamedBlock::CjkCompatibility => "IsCJKCompatibility",
            NamedBlock::CjkCompatibilityForms => "IsCJKCompatibilityForms",
            NamedBlock::CjkCompatibilityIdeographs => "IsCJKCompatibilityIdeographs",
            NamedBlock::CjkRadicalsSupplement => "IsCJKRadicalsSupplement",
            NamedBlock::CjkSymbolsAndPunctuation => "IsCJKSymbolsandPunctuation",
            NamedBlock::CjkUnifiedIdeographs => "IsCJKUnifiedIdeographs",
            NamedBlock::CjkUnifiedIdeographsExtensionA => "IsCJKUnifiedIdeographsExtensionA",
            NamedBlock::CombiningDiacriticalMarks => "IsCombiningDiacriticalMarks",
            NamedBlock::CombiningDiacriticalMarksForSymbols => {
                "IsCombiningDiacriticalMarksforSymbols"
            }
            NamedBlock::CombiningHalfMarks => "IsCombiningHalfMarks",
            NamedBlock::CombiningMarksForSymbols => "IsCombiningMarksforSymbols",
            NamedBlock::ControlPictures => "IsControlPictures",
            NamedBlock::CurrencySymbols => "IsCurrencySymbols",
            NamedBlock::Cyrillic => "IsCyrillic",
            NamedBlock::CyrillicSupplement => "IsCyrillicSupplement",
            NamedBlock::Devanagari => "IsDevanagari",
            NamedBlock::Dingbats => "IsDingbats",
            NamedBlock::EnclosedAlphanumerics => "IsEnclosedAlphanumerics",
            NamedBlock::EnclosedCjkLettersAndMonths => "IsEnclosedCJKLettersandMonths",
            NamedBlock::Ethiopic => "IsEthiopic",
            NamedBlock::GeneralPunctuation => "IsGeneralPunctuation",
            NamedBlock::GeometricShapes => "IsGeometricShapes",
            NamedBlock::Georgian => "IsGeorgian",
            NamedBlock::Greek => "IsGreek",
            NamedBlock::GreekAndCoptic => "IsGreekandCoptic",
            NamedBlock::GreekExtended => "IsGreekExtended",
            NamedBlock::Gujarati => "IsGujarati",
            NamedBlock::Gurmukhi => "IsGurmukhi",
            NamedBlock::HalfwidthAndFullwidthForms => "IsHalfwidthandFullwidthForms",
            NamedBlock::HangulCompatibilityJamo => "IsHangulCompatibilityJamo",
            NamedBlock::HangulJamo => "IsHangulJamo",
            NamedBlock::HangulSyllables => "IsHangulSyllables",
            NamedBlock::Hanunoo => "IsHanunoo",
            NamedBlock::Hebrew => "IsHebrew",
            NamedBlock::HighPrivateUseSurrogates => "IsHighPrivateUseSurrogates",
            NamedBlock::HighSurrogates => "IsHighSurrogates",
            NamedBlock::Hiragana => "IsHiragana",
            NamedBlock::IdeographicDescriptionCharacters => "IsIdeographicDescriptionCharacters",
            NamedBlock::IpaExtensions => "IsIPAExtensions",
            NamedBlock::Kanbun => "IsKanbun",
            NamedBlock::KangxiRadicals => "IsKangxiRadicals",
            NamedBlock::Kannada => "IsKannada",
            NamedBlock::Katakana => "IsKatakana",
            NamedBlock::KatakanaPhoneticExtensions => "IsKatakanaPhoneticExtensions",
            NamedBlock::Khmer => "IsKhmer",
            NamedBlock::KhmerSymbols => "IsKhmerSymbols",
            NamedBlock::Lao => "IsLao",
            NamedBlock::Latin1Supplement => "IsLatin-1Supplement",
            NamedBlock::LatinExtendedA => "IsLatinExtended-A",
            NamedBlock::LatinExtendedAdditional => "IsLatinExtendedAdditional",
            NamedBlock::LatinExtendedB => "IsLatinExtended-B",
            NamedBlock::LetterlikeSymbols => "IsLetterlikeSymbols",
            NamedBlock::Limbu => "IsLimbu",
            NamedBlock::LowSurrogates => "IsLowSurrogates",
            NamedBlock::Malayalam => "IsMalayalam",
            NamedBlock::MathematicalOperators => "IsMathematicalOperators",
            NamedBlock::MiscellaneousMathematicalSymbolsA => {
                "IsMiscellaneousMathematicalSymbols-A"
            }
            NamedBlock::MiscellaneousMathematicalSymbolsB => {
                "IsMiscellaneousMathematicalSymbols-B"
            }
            NamedBlock::MiscellaneousSymbols => "IsMiscellaneousSymbols",
            NamedBlock::MiscellaneousSymbolsAndArrows => "IsMiscellaneousSymbolsandArrows",
            NamedBlock::MiscellaneousTechnical => "IsMiscellaneousTechnical",
            NamedBlock::Mongolian => "IsMongolian",
            NamedBlock::Myanmar => "IsMyanmar",
            NamedBlock::NumberForms => "IsNumberForms",
            NamedBlock::Ogham => "IsOgham",
            NamedBlock::OpticalCharacterRecognition => "IsOpticalCharacterRecognition",
            NamedBlock::Oriya => "IsOriya",
            NamedBlock::PhoneticExtensions => "IsPhoneticExtensions",
            NamedBlock::PrivateUse => "IsPrivateUse",
            NamedBlock::PrivateUseArea => "IsPrivateUseArea",
            NamedBlock::Runic => "IsRunic",
            NamedBlock::Sinhala => "IsSinhala",
            NamedBlock::SmallFormVariants => "IsSmallFormVariants",
            NamedBlock::SpacingModifierLetters => "IsSpacingModifierLetters",
            NamedBlock::Specials => "IsSpecials",
            NamedBlock::SuperscriptsAndSubscripts => "IsSuperscriptsandSubscripts",
            NamedBlock::SupplementalArrowsA => "IsSupplementalArrows-A",
            NamedBlock::SupplementalArrowsB => "IsSupplementalArrows-B",
            NamedBlock::SupplementalMathematicalOperators => {
                "IsSupplementalMathematicalOperators"
            }
            NamedBlock::Syriac => "IsSyriac",
            NamedBlock::Tagalog => "IsTagalog",
            NamedBlock::Tagbanwa => "IsTagbanwa",
            NamedBlock::TaiLe => "IsTaiLe",
            NamedBlock::Tamil => "IsTamil",
            NamedBlock::Telugu => "IsTelugu",
            NamedBlock::Thaana => "IsThaana",
            NamedBlock::Thai => "IsThai",
            NamedBlock::Tibetan => "IsTibetan",
            NamedBlock::UnifiedCanadianAboriginalSyllabics => {
                "IsUnifiedCanadianAboriginalSyllabics"
            }
            NamedBlock::VariationSelectors => "IsVariationSelectors",
            NamedBlock::YiRadicals => "IsYiRadicals",
            NamedBlock::YiSyllables => "IsYiSyllables",
            NamedBlock::YijingHexagramSymbols => "IsYijingHexagramSymbols",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{GeneralCategory, NamedBlock};

    #[test]
    fn test_general_category_designation() {
        assert_eq!(GeneralCategory::AllLetterCharacters.designation(), "L");
        assert_eq!(GeneralCategory::LetterUppercase.designation(), "Lu");
        assert_eq!(GeneralCategory::NumberDecimalDigit.designation(), "Nd");
        assert_eq!(GeneralCategory::SeparatorSpace.designation(), "Zs");
    }

    #[test]
    fn test_named_block_designation() {
        assert_eq!(NamedBlock::BasicLatin.designation(), "IsBasicLatin");
        assert_eq!(NamedBlock::Latin1Supplement.designation(), "IsLatin-1Supplement");
        assert_eq!(NamedBlock::GreekAndCoptic.designation(), "IsGreekandCoptic");
        assert_eq!(NamedBlock::Hiragana.designation(), "IsHiragana");
    }
}
