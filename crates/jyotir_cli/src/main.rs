use clap::{Parser, Subcommand};
use jyotir_charts::{
    compute_atmakaraka, compute_dasha_periods, compute_guna_milan,
    compute_moon_sign_and_nakshatra, compute_name_compatibility, compute_nakshatra,
    compute_rising_sign, compute_sun_sign, compute_yogas, navamsa_for_birth, upapada_for_birth,
};
use jyotir_time::{CivilTime, J2000_JD};
use jyotir_vedic_base::{ALL_NAKSHATRAS, ALL_SIGNS, DAYS_PER_YEAR, Nakshatra, ZodiacSign};

#[derive(Parser)]
#[command(name = "jyotir", about = "Jyotir Vedic chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ascendant (rising sign) for a birth time and place
    RisingSign {
        /// Birth datetime, local civil time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
    },
    /// Sidereal Sun sign for a birth time
    SunSign {
        /// Birth datetime, local civil time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
    },
    /// Sidereal Moon sign and nakshatra for a birth time
    MoonSign {
        /// Birth datetime, local civil time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
    },
    /// Birth nakshatra with lore and interpretation
    Nakshatra {
        /// Birth datetime, local civil time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
    },
    /// Vimshottari mahadasha periods from birth
    Dasha {
        /// Birth datetime, local civil time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
    },
    /// Atmakaraka (soul significator) for a birth time
    Atmakaraka {
        /// Birth datetime, local civil time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
    },
    /// Detected yogas for a birth time, strongest first
    Yogas {
        /// Birth datetime, local civil time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
    },
    /// Moon navamsa (D9) placement
    Navamsa {
        /// Birth datetime, local civil time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
    },
    /// Upapada lagna (marriage arudha) for a birth time and place
    Upapada {
        /// Birth datetime, local civil time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
    },
    /// Guna Milan (Ashtakoota) score for two Moon placements
    GunaMilan {
        /// First person's Moon sign (e.g. Cancer)
        #[arg(long)]
        sign1: String,
        /// First person's nakshatra (e.g. Pushya)
        #[arg(long)]
        nakshatra1: String,
        /// Second person's Moon sign
        #[arg(long)]
        sign2: String,
        /// Second person's nakshatra
        #[arg(long)]
        nakshatra2: String,
    },
    /// Name-numerology compatibility for two names
    NameMatch {
        /// First name
        #[arg(long)]
        name1: String,
        /// Second name
        #[arg(long)]
        name2: String,
    },
}

fn parse_civil(s: &str) -> Result<CivilTime, String> {
    // Parse "YYYY-MM-DDThh:mm" or "YYYY-MM-DDThh:mm:ss"
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm[:ss], got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || !(time_parts.len() == 2 || time_parts.len() == 3) {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = if time_parts.len() == 3 {
        time_parts[2].parse().map_err(|e| format!("{e}"))?
    } else {
        0.0
    };
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || hour > 23 || minute > 59 {
        return Err(format!("date/time component out of range: {s}"));
    }
    Ok(CivilTime::new(year, month, day, hour, minute, second))
}

fn require_civil(s: &str) -> CivilTime {
    parse_civil(s).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn parse_sign_name(s: &str) -> ZodiacSign {
    let lower = s.to_lowercase();
    for sign in ALL_SIGNS {
        if sign.name().to_lowercase() == lower {
            return sign;
        }
    }
    eprintln!("Invalid sign name: {s}");
    eprintln!("Valid: Aries, Taurus, Gemini, Cancer, Leo, Virgo, Libra, Scorpio, Sagittarius, Capricorn, Aquarius, Pisces");
    std::process::exit(1);
}

fn parse_nakshatra_name(s: &str) -> Nakshatra {
    let lower = s.to_lowercase().replace(' ', "");
    for nakshatra in ALL_NAKSHATRAS {
        if nakshatra.name().to_lowercase().replace(' ', "") == lower {
            return nakshatra;
        }
    }
    eprintln!("Invalid nakshatra name: {s}");
    eprintln!("Valid: Ashwini .. Revati (27 nakshatras)");
    std::process::exit(1);
}

fn jd_to_approx_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / DAYS_PER_YEAR
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::RisingSign { date, lat, lon } => {
            let t = require_civil(&date);
            let r = compute_rising_sign(&t, lat, lon);
            println!(
                "Ascendant: {:.4} deg - {} ({} deg {}' {:.1}\" in sign)",
                r.ascendant_deg,
                r.sign.sign.name(),
                r.sign.dms.degrees,
                r.sign.dms.minutes,
                r.sign.dms.seconds
            );
            println!("Ruling planet: {}", r.ruling_planet.name());
            println!(
                "{} / {}: {}",
                r.traits.element.name(),
                r.traits.quality.name(),
                r.traits.characteristics.join(", ")
            );
        }

        Commands::SunSign { date } => {
            let t = require_civil(&date);
            let s = compute_sun_sign(&t);
            println!(
                "Sun (sidereal): {:.4} deg - {} ({:.4} deg in sign)",
                s.sidereal_longitude_deg,
                s.sign.sign.name(),
                s.sign.degrees_in_sign
            );
            println!(
                "{} / {}: {}",
                s.traits.element.name(),
                s.traits.quality.name(),
                s.traits.characteristics.join(", ")
            );
        }

        Commands::MoonSign { date } => {
            let t = require_civil(&date);
            let m = compute_moon_sign_and_nakshatra(&t);
            println!(
                "Moon (sidereal): {:.4} deg - {} ({:.4} deg in sign)",
                m.sidereal_longitude_deg,
                m.sign.sign.name(),
                m.sign.degrees_in_sign
            );
            println!(
                "Nakshatra: {} (index {}) - Pada {}",
                m.nakshatra.nakshatra.name(),
                m.nakshatra.nakshatra_index,
                m.nakshatra.pada
            );
        }

        Commands::Nakshatra { date } => {
            let t = require_civil(&date);
            let n = compute_nakshatra(&t);
            println!(
                "{} (Pada {}) - deity {}, ruled by {}",
                n.info.nakshatra.name(),
                n.info.pada,
                n.traits.deity,
                n.traits.ruling_planet.name()
            );
            println!("Characteristics: {}", n.traits.characteristics.join(", "));
            println!("General: {}", n.reading.general);
            println!("Career: {}", n.reading.career);
            println!("Relationships: {}", n.reading.relationships);
            println!("Spirituality: {}", n.reading.spirituality);
        }

        Commands::Dasha { date } => {
            let t = require_civil(&date);
            for r in compute_dasha_periods(&t) {
                println!(
                    "{:<8} {:7.2}y  ({:.1} - {:.1})",
                    r.period.planet.name(),
                    r.period.duration_days() / DAYS_PER_YEAR,
                    jd_to_approx_year(r.period.start_jd),
                    jd_to_approx_year(r.period.end_jd)
                );
                println!("         {}", r.influence.general);
            }
        }

        Commands::Atmakaraka { date } => {
            let t = require_civil(&date);
            let a = compute_atmakaraka(&t);
            println!(
                "Atmakaraka: {} at {:.4} deg ({:.4} deg in sign)",
                a.planet.name(),
                a.longitude_deg,
                a.degrees_in_sign
            );
            println!("Characteristics: {}", a.characteristics.join(", "));
            println!("General: {}", a.interpretation.general);
            println!("Karmic lessons: {}", a.interpretation.karmic_lessons);
            println!("Spiritual path: {}", a.interpretation.spiritual_path);
            println!("Life purpose: {}", a.interpretation.life_purpose);
        }

        Commands::Yogas { date } => {
            let t = require_civil(&date);
            let yogas = compute_yogas(&t);
            if yogas.is_empty() {
                println!("No yogas detected.");
            }
            for y in yogas {
                let planets: Vec<&str> = y.planets.iter().map(|p| p.name()).collect();
                println!(
                    "{} (strength {}) - {}",
                    y.yoga.name(),
                    y.strength,
                    planets.join(", ")
                );
                println!("  {}", y.interpretation.general);
                println!("  Timing: {}", y.interpretation.timing);
            }
        }

        Commands::Navamsa { date } => {
            let t = require_civil(&date);
            let n = navamsa_for_birth(&t);
            println!(
                "Navamsa sign: {} (lord {})",
                n.navamsa_sign.name(),
                n.lord.name()
            );
            for a in &n.aspects {
                println!("  {} - {}: {}", a.planet.name(), a.aspect, a.influence);
            }
            println!("General: {}", n.interpretation.general);
            println!("Timing: {}", n.interpretation.timing);
            println!("Recommendation: {}", n.interpretation.recommendation);
        }

        Commands::Upapada { date, lat, lon } => {
            let t = require_civil(&date);
            let u = upapada_for_birth(&t, lat, lon);
            println!(
                "Upapada lagna: {} (lord {})",
                u.upapada_sign.name(),
                u.lord.name()
            );
            for a in &u.aspects {
                println!("  {} - {}: {}", a.planet.name(), a.aspect, a.influence);
            }
            println!("General: {}", u.interpretation.general);
            println!("Timing: {}", u.interpretation.timing);
            println!("Recommendation: {}", u.interpretation.recommendation);
        }

        Commands::GunaMilan {
            sign1,
            nakshatra1,
            sign2,
            nakshatra2,
        } => {
            let g = compute_guna_milan(
                parse_sign_name(&sign1),
                parse_nakshatra_name(&nakshatra1),
                parse_sign_name(&sign2),
                parse_nakshatra_name(&nakshatra2),
            );
            println!("Varna:        {}/1", g.breakdown.varna);
            println!("Vashya:       {}/2", g.breakdown.vashya);
            println!("Tara:         {}/3", g.breakdown.tara);
            println!("Yoni:         {}/4", g.breakdown.yoni);
            println!("Graha Maitri: {}/5", g.breakdown.graha_maitri);
            println!("Gana:         {}/6", g.breakdown.gana);
            println!("Bhakoot:      {}/7", g.breakdown.bhakoot);
            println!("Nadi:         {}/8", g.breakdown.nadi);
            println!("Total:        {}/36 - {}", g.total, g.band.level);
            println!("{}", g.band.description);
            println!("{}", g.band.recommendation);
        }

        Commands::NameMatch { name1, name2 } => {
            let r = compute_name_compatibility(&name1, &name2).unwrap_or_else(|e| {
                eprintln!("Name match failed: {e}");
                std::process::exit(1);
            });
            for a in r.aspects {
                println!("{}: {}/100 - {}", a.name, a.score, a.description);
            }
            println!("Overall: {}/100 - {}", r.score, r.interpretation.level);
            println!("{}", r.interpretation.description);
            println!("{}", r.interpretation.recommendation);
        }
    }
}
