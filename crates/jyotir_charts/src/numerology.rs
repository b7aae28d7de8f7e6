//! Name-numerology compatibility.
//!
//! Pythagorean letter values reduce each name to a destiny number (1-9);
//! a pair of destiny numbers indexes three static 9x9 aspect matrices.
//! Non-letter characters are ignored, so spaces and hyphens in full
//! names are fine; a name with no letters at all is an input error.

use crate::error::ChartError;

/// One scored compatibility aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameAspect {
    pub name: &'static str,
    pub score: u8,
    pub description: &'static str,
}

/// Banded interpretation of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameBand {
    pub level: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
}

/// Full name-compatibility result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameCompatibility {
    /// Rounded mean of the three aspect scores.
    pub score: u8,
    pub interpretation: NameBand,
    pub aspects: [NameAspect; 3],
}

/// Pythagorean value of a letter, or None for non-letters.
const fn letter_value(c: char) -> Option<u8> {
    match c {
        'a' | 'j' | 's' => Some(1),
        'b' | 'k' | 't' => Some(2),
        'c' | 'l' | 'u' => Some(3),
        'd' | 'm' | 'v' => Some(4),
        'e' | 'n' | 'w' => Some(5),
        'f' | 'o' | 'x' => Some(6),
        'g' | 'p' | 'y' => Some(7),
        'h' | 'q' | 'z' => Some(8),
        'i' | 'r' => Some(9),
        _ => None,
    }
}

/// Sum of letter values over the name; None when no letter matched.
fn name_number(name: &str) -> Option<u32> {
    let mut sum = 0u32;
    let mut any = false;
    for c in name.to_lowercase().chars() {
        if let Some(v) = letter_value(c) {
            sum += v as u32;
            any = true;
        }
    }
    any.then_some(sum)
}

/// Reduce to a single digit by repeated digit summing.
fn destiny_number(mut n: u32) -> u8 {
    while n > 9 {
        let mut digits = 0;
        while n > 0 {
            digits += n % 10;
            n /= 10;
        }
        n = digits;
    }
    n as u8
}

const EMOTIONAL_MATRIX: [[u8; 9]; 9] = [
    [90, 65, 75, 45, 85, 55, 65, 70, 80],
    [65, 85, 60, 75, 55, 90, 45, 65, 70],
    [75, 60, 85, 65, 70, 50, 85, 45, 75],
    [45, 75, 65, 90, 60, 75, 55, 85, 50],
    [85, 55, 70, 60, 85, 65, 70, 50, 90],
    [55, 90, 50, 75, 65, 85, 60, 75, 45],
    [65, 45, 85, 55, 70, 60, 90, 65, 75],
    [70, 65, 45, 85, 50, 75, 65, 85, 60],
    [80, 70, 75, 50, 90, 45, 75, 60, 85],
];

const INTELLECTUAL_MATRIX: [[u8; 9]; 9] = [
    [85, 70, 65, 55, 75, 60, 80, 45, 90],
    [70, 90, 55, 80, 45, 85, 65, 75, 50],
    [65, 55, 85, 70, 85, 45, 75, 60, 80],
    [55, 80, 70, 85, 60, 75, 45, 90, 65],
    [75, 45, 85, 60, 90, 70, 65, 55, 75],
    [60, 85, 45, 75, 70, 85, 55, 80, 45],
    [80, 65, 75, 45, 65, 55, 85, 70, 90],
    [45, 75, 60, 90, 55, 80, 70, 85, 60],
    [90, 50, 80, 65, 75, 45, 90, 60, 85],
];

const PRACTICAL_MATRIX: [[u8; 9]; 9] = [
    [80, 75, 60, 70, 45, 85, 55, 90, 65],
    [75, 85, 70, 45, 90, 55, 80, 65, 75],
    [60, 70, 90, 85, 65, 75, 45, 55, 80],
    [70, 45, 85, 80, 75, 60, 90, 70, 45],
    [45, 90, 65, 75, 85, 70, 55, 80, 90],
    [85, 55, 75, 60, 70, 90, 65, 45, 55],
    [55, 80, 45, 90, 55, 65, 85, 75, 80],
    [90, 65, 55, 70, 80, 45, 75, 80, 65],
    [65, 75, 80, 45, 90, 55, 80, 65, 85],
];

/// Banded interpretation for an overall score.
pub const fn name_band(score: u8) -> NameBand {
    if score >= 85 {
        NameBand {
            level: "Excellent",
            description: "You have a naturally harmonious connection with strong potential \
                          for a lasting relationship.",
            recommendation: "This is a highly favorable match. Focus on maintaining open \
                             communication and mutual understanding.",
        }
    } else if score >= 70 {
        NameBand {
            level: "Very Good",
            description: "Your names indicate strong compatibility with good potential for \
                          growth together.",
            recommendation: "Build on your natural compatibility by sharing experiences and \
                             supporting each other's goals.",
        }
    } else if score >= 55 {
        NameBand {
            level: "Good",
            description: "You have a positive connection with room for developing deeper \
                          understanding.",
            recommendation: "Work on strengthening communication and finding common ground \
                             in your differences.",
        }
    } else if score >= 40 {
        NameBand {
            level: "Average",
            description: "Your compatibility shows potential but may require effort to \
                          maintain harmony.",
            recommendation: "Focus on developing patience and understanding of each other's \
                             perspectives.",
        }
    } else {
        NameBand {
            level: "Challenging",
            description: "Your names indicate some natural differences that may require \
                          extra attention.",
            recommendation: "Success is possible with conscious effort, understanding, and \
                             willingness to compromise.",
        }
    }
}

/// Score two names against each other.
pub fn compute_name_compatibility(
    name1: &str,
    name2: &str,
) -> Result<NameCompatibility, ChartError> {
    let n1 = name_number(name1).ok_or(ChartError::EmptyName("first"))?;
    let n2 = name_number(name2).ok_or(ChartError::EmptyName("second"))?;

    let i = (destiny_number(n1) - 1) as usize;
    let j = (destiny_number(n2) - 1) as usize;

    let aspects = [
        NameAspect {
            name: "Emotional Compatibility",
            score: EMOTIONAL_MATRIX[i][j],
            description: "How well you connect emotionally and understand each other's \
                          feelings.",
        },
        NameAspect {
            name: "Intellectual Compatibility",
            score: INTELLECTUAL_MATRIX[i][j],
            description: "Your ability to communicate and share ideas effectively.",
        },
        NameAspect {
            name: "Practical Compatibility",
            score: PRACTICAL_MATRIX[i][j],
            description: "How well you work together in daily life and handle \
                          responsibilities.",
        },
    ];

    let sum: u32 = aspects.iter().map(|a| a.score as u32).sum();
    let score = (sum as f64 / aspects.len() as f64).round() as u8;

    Ok(NameCompatibility {
        score,
        interpretation: name_band(score),
        aspects,
    })
}
