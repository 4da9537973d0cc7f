//! The reduction unit: one output column of a truth table.
//!
//! A [`Function`] owns its input combinations and the arena of implicants
//! generated from them. Prime implicants are found with the Quine–McCluskey
//! procedure:
//!
//! 1. Every input combination (required or don't-care) starts as a singleton implicant.
//! 2. Each round pairs the implicants produced by the previous round,
//!    merging pairs that differ in exactly one significant bit.
//! 3. Every implicant that took part in a merge is marked non-essential.
//! 4. After at most `width` rounds, the implicants still marked essential are
//!    the prime implicants covering at least one required combination.

use log::{debug, warn};

use crate::bitset::BitSet;
use crate::error::{Error, Result};
use crate::implicant::Implicant;
use crate::minterm::Minterm;
use crate::types::ImplicantId;
use crate::utils::{implicant_label, MAX_WIDTH};

#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    width: u32,
    /// Required and don't-care combinations, sorted by value.
    minterms: Vec<Minterm>,
    implicants: Vec<Implicant>,
}

impl Function {
    /// Build a function of `width` inputs from its required (`minterms`) and
    /// don't-care (`dont_cares`) input combinations.
    ///
    /// Duplicates inside one list are collapsed. A value present in both lists,
    /// or not representable with `width` bits, is rejected.
    pub fn new(name: impl Into<String>, width: u32, minterms: &[u32], dont_cares: &[u32]) -> Result<Self> {
        let name = name.into();
        if width == 0 || width > MAX_WIDTH {
            return Err(Error::InvalidWidth { width, max: MAX_WIDTH });
        }

        let minterms = Self::sorted_unique(&name, width, minterms)?;
        let dont_cares = Self::sorted_unique(&name, width, dont_cares)?;

        // Merge both sorted lists, rejecting values present in both.
        let mut merged = Vec::with_capacity(minterms.len() + dont_cares.len());
        let (mut i, mut j) = (0, 0);
        while i < minterms.len() || j < dont_cares.len() {
            if j == dont_cares.len() || (i < minterms.len() && minterms[i] < dont_cares[j]) {
                merged.push(Minterm::new(minterms[i]));
                i += 1;
            } else if i == minterms.len() || dont_cares[j] < minterms[i] {
                merged.push(Minterm::dont_care(dont_cares[j]));
                j += 1;
            } else {
                return Err(Error::ConflictingAssignment(minterms[i]));
            }
        }

        Ok(Function {
            name,
            width,
            minterms: merged,
            implicants: Vec::new(),
        })
    }

    fn sorted_unique(name: &str, width: u32, values: &[u32]) -> Result<Vec<u32>> {
        if let Some(&value) = values.iter().find(|&&v| u64::from(v) >> width != 0) {
            return Err(Error::OutOfRange { value, width });
        }
        let mut values = values.to_vec();
        values.sort_unstable();
        let before = values.len();
        values.dedup();
        if values.len() != before {
            warn!("{}: collapsed {} duplicate input(s)", name, before - values.len());
        }
        Ok(values)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// All input combinations (required and don't-care), sorted by value.
    pub fn minterms(&self) -> &[Minterm] {
        &self.minterms
    }

    /// Input combinations the function must be true for.
    pub fn required(&self) -> impl Iterator<Item = &Minterm> + '_ {
        self.minterms.iter().filter(|m| !m.is_dont_care())
    }

    pub fn has_required(&self) -> bool {
        self.required().next().is_some()
    }

    /// Find how `value` is assigned: `Some(false)` for a required minterm,
    /// `Some(true)` for a don't-care, `None` if the function is 0 there.
    pub fn lookup(&self, value: u32) -> Option<bool> {
        self.minterms
            .binary_search_by_key(&value, |m| m.value())
            .ok()
            .map(|i| self.minterms[i].is_dont_care())
    }

    /// The implicant arena.
    pub fn implicants(&self) -> &[Implicant] {
        &self.implicants
    }

    pub fn implicant(&self, id: ImplicantId) -> &Implicant {
        &self.implicants[id.index()]
    }

    pub fn ids(&self) -> impl Iterator<Item = ImplicantId> {
        (0..self.implicants.len()).map(ImplicantId::new)
    }

    /// Run the Quine–McCluskey rounds, filling the arena with every implicant
    /// (prime or not) and setting the essential flags.
    pub fn generate_implicants(&mut self) {
        let width = self.width;
        let mut implicants: Vec<Implicant> = self.minterms.iter().map(|m| Implicant::from_minterm(m, width)).collect();

        // Number of implicants added by the previous round; they sit at the end of the arena.
        let mut previous = implicants.len();
        for round in 0..width {
            let start = implicants.len() - previous;
            let end = implicants.len();

            let mut combined = BitSet::new(end);
            let mut fresh: Vec<Implicant> = Vec::new();
            for i in start..end {
                for j in (i + 1)..end {
                    let Some(merged) = implicants[i].combine(&implicants[j]) else {
                        continue;
                    };
                    combined.insert(i);
                    combined.insert(j);
                    // Group sizes double every round, so a duplicate can only
                    // be one of the implicants produced in this same round.
                    if !fresh.contains(&merged) {
                        fresh.push(merged);
                    }
                }
            }

            for i in combined.iter() {
                implicants[i].set_essential(false);
            }

            debug!(
                "{}: round {} merged {} of {} implicant(s) into {} new",
                self.name,
                round + 1,
                combined.len(),
                end - start,
                fresh.len()
            );

            previous = fresh.len();
            implicants.extend(fresh);
            if previous == 0 {
                break;
            }
        }

        self.implicants = implicants;
    }

    /// Drop every implicant not flagged essential, leaving the prime implicants,
    /// and give the survivors their display names.
    pub fn retain_essential(&mut self) -> Result<()> {
        let total = self.implicants.len();
        self.implicants.retain(|imp| imp.is_essential());
        debug!("{}: kept {} of {} implicant(s)", self.name, self.implicants.len(), total);

        if self.implicants.is_empty() {
            return Err(Error::NoEssentialImplicants(self.name.clone()));
        }

        for (i, imp) in self.implicants.iter_mut().enumerate() {
            imp.set_name(implicant_label(i));
        }
        Ok(())
    }
}
