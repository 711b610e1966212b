/// Composite key used to join reference rows against stream records.
///
/// Built from chromosome, position, ref allele and alt allele joined with the
/// field separator of the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JoinKey(pub String);

impl JoinKey {
    /// Assemble a key from its four parts, in the order chromosome, position, ref, alt.
    ///
    /// No normalization is applied here; reference rows go through
    /// [`normalize_chromosome`] first, stream records are used as-is.
    #[must_use]
    pub fn from_parts(chrom: &str, pos: &str, ref_allele: &str, alt_allele: &str, sep: &str) -> Self {
        Self([chrom, pos, ref_allele, alt_allele].join(sep))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JoinKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalize a chromosome name to the NCBI-style convention used by CADD.
///
/// The name is upper-cased and every `CHR` token is removed, so `chr1`,
/// `CHR1`, `Chr1` and `1` all become `1`, and `chrX` becomes `X`.
///
/// # Examples
///
/// ```
/// use cadd_filter::core::key::normalize_chromosome;
///
/// assert_eq!(normalize_chromosome("chr1"), "1");
/// assert_eq!(normalize_chromosome("ChrM"), "M");
/// assert_eq!(normalize_chromosome("MT"), "MT");
/// ```
#[must_use]
pub fn normalize_chromosome(chrom: &str) -> String {
    chrom.to_uppercase().replace("CHR", "")
}
