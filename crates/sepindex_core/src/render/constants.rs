//! Static text and layout constants for the index document.
//!
//! All of these are declared configuration, never computed: the closed table
//! widths, the reserved-number list and the boilerplate prose emitted around
//! the generated sections.

/// Width of the title column in index tables.
pub const TITLE_WIDTH: usize = 55;
/// Width of the author column in index tables.
pub const AUTHOR_WIDTH: usize = 40;

/// Numbers set aside outside the normal allocation flow, with their
/// claimants. Never backed by an actual record; rendered as-is. Keep sorted.
pub const RESERVED: &[(u32, &str)] = &[(801, "Warsaw")];

/// Document preamble with the generation date stamped in.
pub(crate) fn preamble(date: &str) -> String {
    format!(
        "\
SEP: 0
Title: Index of Python Enhancement Proposals (SEPs)
Version: N/A
Last-Modified: {date}
Author: python-dev <python-dev@python.org>
Status: Active
Type: Informational
Content-Type: text/x-rst
Created: 13-Jul-2000"
    )
}

pub(crate) const INTRO: &str = "\
This SEP contains the index of all Python Enhancement Proposals,
known as SEPs.  SEP numbers are assigned by the SEP editors, and
once assigned are never changed [1_].  The version control history [2_] of
the SEP texts represent their historical record.";

pub(crate) const REFERENCES: &str = "\
.. [1] SEP 1: SEP Purpose and Guidelines
.. [2] View SEP history online: https://github.com/python/seps";

pub(crate) const FOOTER: &str = "\
..
   Local Variables:
   mode: indented-text
   indent-tabs-mode: nil
   sentence-end-double-space: t
   fill-column: 70
   coding: utf-8
   End:";
