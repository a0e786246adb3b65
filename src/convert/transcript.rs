//! Transcript coordinate conversion
//!
//! A [`TranscriptMapper`] composes one transcript's exon alignments into a
//! genome-to-transcript [`IntervalMapper`](crate::align::IntervalMapper) and
//! converts ranges between three axes:
//!
//! - `g`: the reference (genomic) sequence
//! - `r`: the spliced transcript, 5' to 3' in transcript orientation
//! - `c`: the spliced transcript, relative to the CDS start
//!
//! Strand reflection and CDS shifting happen here; the underlying mapper
//! always works in genomic-forward transcript coordinates. Genomic queries
//! landing wholly inside an intron come back as zero-width RNA ranges with
//! signed offsets into the intron, and such ranges convert back to their
//! genomic positions.

use log::debug;

use crate::align::{build_tx_ops, IntervalMapper};
use crate::convert::ranges::{CdsRange, GenomeRange, RnaRange};
use crate::data::{Strand, TranscriptProvider, TxAlignment};
use crate::error::TxMapError;
use crate::Result;

/// Coordinate converter for one transcript on one reference sequence.
///
/// Immutable after construction; conversions never lock or allocate beyond
/// the returned range, so a shared reference can serve concurrent callers.
///
/// # Examples
///
/// ```
/// use ferro_txmap::{GenomeRange, MockProvider, TranscriptMapper};
///
/// let provider = MockProvider::with_test_data();
/// let mapper = TranscriptMapper::new(&provider, "NM_012345.6", "NC_000001.11").unwrap();
///
/// // Exon 2 starts at genomic 1200 and transcript position 100
/// let rna = mapper.g_to_r(GenomeRange::new(1200, 1210).unwrap()).unwrap();
/// assert_eq!((rna.start_i(), rna.end_i()), (100, 110));
///
/// // The CDS begins 50 bases into the transcript
/// let cds = mapper.r_to_c(rna).unwrap();
/// assert_eq!(cds.to_string(), "50_60");
/// ```
#[derive(Debug, Clone)]
pub struct TranscriptMapper {
    tx_ac: String,
    ref_ac: String,
    strand: Strand,
    gc_offset: i64,
    cds: Option<(i64, i64)>,
    mapper: IntervalMapper,
}

impl TranscriptMapper {
    /// Fetch a transcript's alignment from a provider and build a mapper.
    pub fn new<P: TranscriptProvider>(provider: &P, tx_ac: &str, ref_ac: &str) -> Result<Self> {
        Self::from_alignment(provider.tx_alignment(tx_ac, ref_ac)?)
    }

    /// Build a mapper from an alignment record.
    ///
    /// # Errors
    ///
    /// Fails with [`TxMapError::UnsupportedStrand`] if the raw strand is not
    /// `+1`/`-1`, and [`TxMapError::Configuration`] if the exon list is
    /// empty or malformed, or if CDS bounds are half-supplied, inverted, or
    /// fall outside the transcript.
    pub fn from_alignment(alignment: TxAlignment) -> Result<Self> {
        let strand = Strand::try_from(alignment.strand)?;
        let ops = build_tx_ops(&alignment.exons, strand)?;
        let mapper = IntervalMapper::from_ops(&ops)?;
        // build_tx_ops rejected an empty exon list already
        let gc_offset = alignment.exons[0].start_i;
        let cds = match (alignment.cds_start_i, alignment.cds_end_i) {
            (Some(start), Some(end)) => {
                if start > end {
                    return Err(TxMapError::configuration(format!(
                        "CDS start {start} is greater than CDS end {end}"
                    )));
                }
                if start < 0 || end > mapper.tgt_len() {
                    return Err(TxMapError::configuration(format!(
                        "CDS {start}..{end} lies outside the transcript (length {})",
                        mapper.tgt_len()
                    )));
                }
                Some((start, end))
            }
            (None, None) => None,
            _ => {
                return Err(TxMapError::configuration(format!(
                    "Transcript {} has a half-specified CDS",
                    alignment.tx_ac
                )))
            }
        };
        debug!(
            "Built mapper for {} on {}: {} exons, {} strand, {} transcript bases",
            alignment.tx_ac,
            alignment.ref_ac,
            alignment.exons.len(),
            strand,
            mapper.tgt_len()
        );
        Ok(Self {
            tx_ac: alignment.tx_ac,
            ref_ac: alignment.ref_ac,
            strand,
            gc_offset,
            cds,
            mapper,
        })
    }

    /// Transcript accession
    pub fn tx_ac(&self) -> &str {
        &self.tx_ac
    }

    /// Reference sequence accession
    pub fn ref_ac(&self) -> &str {
        &self.ref_ac
    }

    /// Strand of the transcript on the reference
    #[inline]
    pub const fn strand(&self) -> Strand {
        self.strand
    }

    /// Genomic position the mapper's reference axis is anchored at
    #[inline]
    pub const fn gc_offset(&self) -> i64 {
        self.gc_offset
    }

    /// Length of the spliced transcript
    #[inline]
    pub const fn tgt_len(&self) -> i64 {
        self.mapper.tgt_len()
    }

    /// CDS bounds in forward transcript coordinates, if coding
    #[inline]
    pub const fn cds_bounds(&self) -> Option<(i64, i64)> {
        self.cds
    }

    /// Whether the transcript carries a CDS
    #[inline]
    pub const fn is_coding(&self) -> bool {
        self.cds.is_some()
    }

    /// Convert a genomic range to transcript (RNA) coordinates.
    ///
    /// A query lying wholly inside an intron collapses to the zero-width
    /// exon boundary and reports signed offsets into the intron: positive
    /// from the upstream exon, negative from the downstream exon, measured
    /// in transcript orientation.
    pub fn g_to_r(&self, range: GenomeRange) -> Result<RnaRange> {
        let grs = range.start_i() - self.gc_offset;
        let gre = range.end_i() - self.gc_offset;
        let (frs, fre) = self.mapper.map_ref_to_tgt(grs, gre)?;
        let (fso, feo) = if frs == fre {
            match self.mapper.ref_gap_containing(grs, gre) {
                Some((gap_start, gap_end)) => Self::intronic_offsets(grs, gre, gap_start, gap_end),
                None => (0, 0),
            }
        } else {
            (0, 0)
        };
        match self.strand {
            Strand::Plus => RnaRange::with_offsets(frs, fre, fso, feo),
            Strand::Minus => {
                let len = self.mapper.tgt_len();
                RnaRange::with_offsets(len - fre, len - frs, -feo, -fso)
            }
        }
    }

    /// Convert a transcript (RNA) range to genomic coordinates.
    ///
    /// Ranges with intronic offsets must anchor both positions at the same
    /// exon boundary (the form [`g_to_r`](Self::g_to_r) emits); each offset
    /// is then applied from the intron edge its sign selects.
    pub fn r_to_g(&self, range: RnaRange) -> Result<GenomeRange> {
        let (frs, fre, fso, feo) = match self.strand {
            Strand::Plus => (
                range.start_i(),
                range.end_i(),
                range.start_offset(),
                range.end_offset(),
            ),
            Strand::Minus => {
                let len = self.mapper.tgt_len();
                (
                    len - range.end_i(),
                    len - range.start_i(),
                    -range.end_offset(),
                    -range.start_offset(),
                )
            }
        };
        let (gs, ge) = if fso != 0 || feo != 0 {
            if frs != fre {
                return Err(TxMapError::invalid_interval(format!(
                    "Intronic offsets require a zero-width anchor, got {range}"
                )));
            }
            let (gap_start, gap_end) = self.mapper.gap_at_tgt_boundary(frs).ok_or_else(|| {
                TxMapError::invalid_interval(format!(
                    "No intron adjoins transcript position {frs}"
                ))
            })?;
            let gs = if fso >= 0 { gap_start + fso } else { gap_end + fso };
            let ge = if feo >= 0 { gap_start + feo } else { gap_end + feo };
            (gs, ge)
        } else {
            self.mapper.map_tgt_to_ref(frs, fre)?
        };
        GenomeRange::new(gs + self.gc_offset, ge + self.gc_offset)
    }

    /// Convert a transcript (RNA) range to CDS coordinates.
    ///
    /// Offsets pass through unchanged. Fails with [`TxMapError::NonCoding`]
    /// when the transcript has no CDS.
    pub fn r_to_c(&self, range: RnaRange) -> Result<CdsRange> {
        let (cds_start, _) = self.cds_or_err()?;
        CdsRange::with_offsets(
            range.start_i() - cds_start,
            range.end_i() - cds_start,
            range.start_offset(),
            range.end_offset(),
        )
    }

    /// Convert a CDS range to transcript (RNA) coordinates.
    pub fn c_to_r(&self, range: CdsRange) -> Result<RnaRange> {
        let (cds_start, _) = self.cds_or_err()?;
        RnaRange::with_offsets(
            range.start_i() + cds_start,
            range.end_i() + cds_start,
            range.start_offset(),
            range.end_offset(),
        )
    }

    /// Convert a genomic range to CDS coordinates.
    pub fn g_to_c(&self, range: GenomeRange) -> Result<CdsRange> {
        self.r_to_c(self.g_to_r(range)?)
    }

    /// Convert a CDS range to genomic coordinates.
    pub fn c_to_g(&self, range: CdsRange) -> Result<GenomeRange> {
        self.r_to_g(self.c_to_r(range)?)
    }

    fn cds_or_err(&self) -> Result<(i64, i64)> {
        self.cds.ok_or_else(|| TxMapError::NonCoding {
            tx_ac: self.tx_ac.clone(),
        })
    }

    /// Signed offsets of a gap-interior query relative to its gap run.
    ///
    /// The gap midpoint rounds up; positions at or before it measure forward
    /// from the gap start, positions past it measure backward from the gap
    /// end. A query spanning the midpoint anchors each endpoint to its own
    /// edge.
    fn intronic_offsets(gs: i64, ge: i64, gap_start: i64, gap_end: i64) -> (i64, i64) {
        let midpoint = (gap_start + gap_end + 1).div_euclid(2);
        if ge <= midpoint {
            (gs - gap_start, ge - gap_start)
        } else if gs > midpoint {
            (gs - gap_end, ge - gap_end)
        } else {
            (gs - gap_start, ge - gap_end)
        }
    }
}
