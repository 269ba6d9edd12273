//! Palette generation: sets of distinct colors that look good together.
//!
//! The `soft_*` generators run k-means clustering over a lattice of
//! candidate points in L*a*b* space, optionally restricted by a caller
//! predicate. The `fast_*` generators trade quality for speed and just
//! space hues evenly around the HSV circle.

use itertools::iproduct;
use thiserror::Error;

use crate::color::{Hsv, Lab, Lch, Srgb};
use crate::distance::lab_euclidean;
use crate::util::Rng;
use crate::Float;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("constraint too strong: {requested} colors requested, only {available} candidates")]
    TooConstrained { requested: usize, available: usize },
}

/// Tuning knobs for [`soft_with`].
pub struct SoftPaletteSettings {
    /// Restricts the space of allowed colors; `None` allows every
    /// displayable color.
    pub check_color: Option<Box<dyn Fn(&Lab) -> bool>>,
    /// K-means iteration count. 50 is plenty for convergence.
    pub iterations: usize,
    /// Samples the candidate lattice about eight times more densely.
    /// Needed for strong constraints, at a considerable speed cost.
    pub many_samples: bool,
}

impl Default for SoftPaletteSettings {
    fn default() -> Self {
        Self {
            check_color: None,
            iterations: 50,
            many_samples: false,
        }
    }
}

fn lab_eq(lab1: &Lab, lab2: &Lab) -> bool {
    const LAB_DELTA: Float = 1e-6;
    (lab1.l - lab2.l).abs() < LAB_DELTA
        && (lab1.a - lab2.a).abs() < LAB_DELTA
        && (lab1.b - lab2.b).abs() < LAB_DELTA
}

/// Outcome of recomputing one cluster's medoid for a round.
enum ClusterUpdate {
    /// The cluster mean exists and is an allowed color.
    HasValidCentroid(Lab),
    /// The cluster was empty or its mean fell outside the allowed region;
    /// the medoid must be replaced by the unused candidate closest to the
    /// carried point.
    NeedsFallbackMedoid(Lab),
}

/// Generates `count` colors that are as distinct from each other as
/// possible while being evenly spread through the whole gamut.
pub fn soft(count: usize, rng: &mut Rng) -> Result<Vec<Srgb>, PaletteError> {
    soft_with(count, SoftPaletteSettings::default(), rng)
}

/// Like [`soft`], but constrained and tuned by `settings`.
pub fn soft_with(
    count: usize,
    settings: SoftPaletteSettings,
    rng: &mut Rng,
) -> Result<Vec<Srgb>, PaletteError> {
    let check = |lab: &Lab| {
        lab.to_srgb().is_valid() && settings.check_color.as_ref().map_or(true, |f| f(lab))
    };

    // Candidate points on a lattice over L in [0..1], a and b in [-1..1].
    // Stepping by integer index keeps the lattice free of float drift.
    let (l_steps, ab_steps) = if settings.many_samples {
        (100, 40)
    } else {
        (20, 20)
    };
    let mut samples = Vec::new();
    for (li, ai, bi) in iproduct!(0..=l_steps, 0..=ab_steps, 0..=ab_steps) {
        let lab = Lab::new(
            li as Float / l_steps as Float,
            2.0 * ai as Float / ab_steps as Float - 1.0,
            2.0 * bi as Float / ab_steps as Float - 1.0,
        );
        if check(&lab) {
            samples.push(lab);
        }
    }

    if samples.len() < count {
        return Err(PaletteError::TooConstrained {
            requested: count,
            available: samples.len(),
        });
    }
    if samples.len() == count {
        return Ok(samples.iter().map(Lab::to_srgb).collect());
    }

    // Seed the means with distinct random samples.
    let mut means: Vec<Lab> = Vec::with_capacity(count);
    for _ in 0..count {
        let mut mean = samples[rng.uniform_usize(samples.len())];
        while means.iter().any(|m| lab_eq(m, &mean)) {
            mean = samples[rng.uniform_usize(samples.len())];
        }
        means.push(mean);
    }

    let mut clusters = vec![0usize; samples.len()];
    let mut used = vec![false; samples.len()];
    for _ in 0..settings.iterations {
        cluster_round(&samples, &mut means, &mut clusters, &mut used, &check);
    }

    Ok(means.iter().map(Lab::to_srgb).collect())
}

/// One k-medoid round: assign every candidate to its nearest medoid, then
/// move each medoid to its cluster centroid, substituting a nearby unused
/// candidate where the centroid is unusable.
///
/// The `used` flags are rebuilt from scratch every round; only candidates
/// serving as a medoid right now (or handed out as a substitute this round)
/// are withheld from the fallback pool.
fn cluster_round<F: Fn(&Lab) -> bool>(
    samples: &[Lab],
    means: &mut [Lab],
    clusters: &mut [usize],
    used: &mut [bool],
    check: F,
) {
    for (isample, sample) in samples.iter().enumerate() {
        used[isample] = false;
        let mut min_dist = Float::MAX;
        for (imean, mean) in means.iter().enumerate() {
            let dist = lab_euclidean(sample, mean);
            if dist < min_dist {
                min_dist = dist;
                clusters[isample] = imean;
            }
            if lab_eq(sample, mean) {
                used[isample] = true;
            }
        }
    }

    for imean in 0..means.len() {
        let mut sum = Lab::new(0.0, 0.0, 0.0);
        let mut size = 0;
        for (isample, sample) in samples.iter().enumerate() {
            if clusters[isample] == imean {
                sum = sum + *sample;
                size += 1;
            }
        }

        let update = if size == 0 {
            // Orphaned medoid; restart it near its previous position.
            ClusterUpdate::NeedsFallbackMedoid(means[imean])
        } else {
            let n = size as Float;
            let centroid = Lab::new(sum.l / n, sum.a / n, sum.b / n);
            if check(&centroid) {
                ClusterUpdate::HasValidCentroid(centroid)
            } else {
                ClusterUpdate::NeedsFallbackMedoid(centroid)
            }
        };

        match update {
            ClusterUpdate::HasValidCentroid(centroid) => means[imean] = centroid,
            ClusterUpdate::NeedsFallbackMedoid(target) => {
                // Snap to the closest unused candidate, which is an
                // allowed color by construction.
                let mut min_dist = Float::MAX;
                let mut fallback = None;
                for (isample, sample) in samples.iter().enumerate() {
                    if used[isample] {
                        continue;
                    }
                    let dist = lab_euclidean(sample, &target);
                    if dist < min_dist {
                        min_dist = dist;
                        fallback = Some(isample);
                    }
                }
                if let Some(isample) = fallback {
                    used[isample] = true;
                    means[imean] = samples[isample];
                }
            }
        }
    }
}

/// Generates `count` warm colors, clustered like [`soft`] but restricted to
/// a subdued, low-lightness region of the gamut.
pub fn warm(count: usize, rng: &mut Rng) -> Result<Vec<Srgb>, PaletteError> {
    let warmy = |lab: &Lab| {
        let lch = lab.to_lch();
        (0.1..=0.4).contains(&lch.c) && (0.2..=0.5).contains(&lab.l)
    };
    soft_with(
        count,
        SoftPaletteSettings {
            check_color: Some(Box::new(warmy)),
            iterations: 50,
            many_samples: true,
        },
        rng,
    )
}

/// Generates `count` happy colors, clustered like [`soft`] but restricted
/// to a saturated, bright region of the gamut.
pub fn happy(count: usize, rng: &mut Rng) -> Result<Vec<Srgb>, PaletteError> {
    let happiness = |lab: &Lab| {
        let lch = lab.to_lch();
        lch.c >= 0.3 && (0.4..=0.8).contains(&lab.l)
    };
    soft_with(
        count,
        SoftPaletteSettings {
            check_color: Some(Box::new(happiness)),
            iterations: 50,
            many_samples: true,
        },
        rng,
    )
}

/// Generates `count` warm colors by spacing hues evenly around the HSV
/// circle. Much faster than [`warm`] but the result is of lower quality.
pub fn fast_warm(count: usize, rng: &mut Rng) -> Vec<Srgb> {
    (0..count)
        .map(|i| {
            Hsv::new(
                i as Float * (360.0 / count as Float),
                0.55 + rng.uniform_float() * 0.2,
                0.35 + rng.uniform_float() * 0.2,
            )
            .to_srgb()
        })
        .collect()
}

/// Generates `count` happy colors by spacing hues evenly around the HSV
/// circle. Much faster than [`happy`] but the result is of lower quality.
pub fn fast_happy(count: usize, rng: &mut Rng) -> Vec<Srgb> {
    (0..count)
        .map(|i| {
            Hsv::new(
                i as Float * (360.0 / count as Float),
                0.8 + rng.uniform_float() * 0.2,
                0.65 + rng.uniform_float() * 0.2,
            )
            .to_srgb()
        })
        .collect()
}

/// A single random warm color: dark with subdued chroma.
pub fn warm_color(rng: &mut Rng) -> Srgb {
    loop {
        let c = Lch::new(
            0.2 + rng.uniform_float() * 0.3,
            0.1 + rng.uniform_float() * 0.3,
            rng.uniform_float() * 360.0,
        )
        .to_srgb();
        if c.is_valid() {
            return c;
        }
    }
}

/// A single random happy color: bright and saturated.
pub fn happy_color(rng: &mut Rng) -> Srgb {
    loop {
        let c = Lch::new(
            0.5 + rng.uniform_float() * 0.3,
            0.5 + rng.uniform_float() * 0.3,
            rng.uniform_float() * 360.0,
        )
        .to_srgb();
        if c.is_valid() {
            return c;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_palette_has_requested_size() {
        let mut rng = Rng::from_seed(1);
        let palette = soft(7, &mut rng).unwrap();
        assert_eq!(palette.len(), 7);
        assert!(palette.iter().all(Srgb::is_valid));
    }

    #[test]
    fn warm_palette_honors_constraint() {
        let mut rng = Rng::from_seed(2);
        let palette = warm(4, &mut rng).unwrap();
        assert_eq!(palette.len(), 4);
        for c in &palette {
            let lab = c.to_lab();
            let lch = lab.to_lch();
            // A hair of slack for the Lab -> sRGB -> Lab round trip.
            assert!((0.1 - 1e-6..=0.4 + 1e-6).contains(&lch.c), "{lch:?}");
            assert!((0.2 - 1e-6..=0.5 + 1e-6).contains(&lab.l), "{lab:?}");
        }
    }

    #[test]
    fn happy_palette_honors_constraint() {
        let mut rng = Rng::from_seed(3);
        let palette = happy(4, &mut rng).unwrap();
        assert_eq!(palette.len(), 4);
        for c in &palette {
            let lab = c.to_lab();
            assert!(lab.to_lch().c >= 0.3 - 1e-6);
            assert!((0.4 - 1e-6..=0.8 + 1e-6).contains(&lab.l));
        }
    }

    #[test]
    fn impossible_constraint_is_reported() {
        let mut rng = Rng::from_seed(4);
        let settings = SoftPaletteSettings {
            check_color: Some(Box::new(|_| false)),
            iterations: 50,
            many_samples: false,
        };
        match soft_with(3, settings, &mut rng) {
            Err(PaletteError::TooConstrained {
                requested,
                available,
            }) => {
                assert_eq!(requested, 3);
                assert_eq!(available, 0);
            }
            other => panic!("expected TooConstrained, got {other:?}"),
        }
    }

    #[test]
    fn fallback_pool_recovers_between_rounds() {
        use approx::assert_abs_diff_eq;

        let samples = [
            Lab::new(0.2, 0.0, 0.0),
            Lab::new(0.25, 0.0, 0.0),
            Lab::new(0.8, 0.0, 0.0),
        ];
        let mut means = vec![Lab::new(0.2, 0.0, 0.0), Lab::new(2.0, 0.0, 0.0)];
        let mut clusters = vec![0usize; samples.len()];
        // A flag left over from an earlier round must not lock the
        // candidate out of the fallback pool for good.
        let mut used = vec![false, false, true];

        cluster_round(&samples, &mut means, &mut clusters, &mut used, |_| true);

        // Every sample sits closer to the first medoid, so the second
        // cluster is empty and its medoid restarts at the nearest
        // candidate, which is the formerly flagged one.
        assert_eq!(means[1], samples[2]);
        assert!(used[2]);
        assert_abs_diff_eq!(means[0].l, (0.2 + 0.25 + 0.8) / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = soft(5, &mut Rng::from_seed(99)).unwrap();
        let b = soft(5, &mut Rng::from_seed(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fast_palettes_are_valid_and_sized() {
        let mut rng = Rng::from_seed(5);
        for palette in [fast_warm(6, &mut rng), fast_happy(6, &mut rng)] {
            assert_eq!(palette.len(), 6);
            assert!(palette.iter().all(Srgb::is_valid));
        }
    }

    #[test]
    fn single_color_generators_stay_in_gamut() {
        let mut rng = Rng::from_seed(6);
        for _ in 0..25 {
            assert!(warm_color(&mut rng).is_valid());
            assert!(happy_color(&mut rng).is_valid());
        }
    }
}
