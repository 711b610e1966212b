/// Zero-based positions of the variant columns in a reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub chrom: usize,
    pub pos: usize,
    pub ref_allele: usize,
    pub alt_allele: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            chrom: 0,
            pos: 1,
            ref_allele: 2,
            alt_allele: 3,
        }
    }
}

impl ColumnLayout {
    #[must_use]
    pub fn new(chrom: usize, pos: usize, ref_allele: usize, alt_allele: usize) -> Self {
        Self {
            chrom,
            pos,
            ref_allele,
            alt_allele,
        }
    }

    /// Minimum number of fields a row needs for every column to be present
    #[must_use]
    pub fn required_fields(&self) -> usize {
        self.chrom
            .max(self.pos)
            .max(self.ref_allele)
            .max(self.alt_allele)
            + 1
    }

    /// Pick the chromosome, position, ref and alt fields out of a split row.
    ///
    /// Returns `None` when the row is too short for any of the columns.
    #[must_use]
    pub fn extract<'a>(&self, fields: &[&'a str]) -> Option<[&'a str; 4]> {
        Some([
            *fields.get(self.chrom)?,
            *fields.get(self.pos)?,
            *fields.get(self.ref_allele)?,
            *fields.get(self.alt_allele)?,
        ])
    }
}

impl std::fmt::Display for ColumnLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CHROM={} POS={} REF={} ALT={}",
            self.chrom, self.pos, self.ref_allele, self.alt_allele
        )
    }
}
