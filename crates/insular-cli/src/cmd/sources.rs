//! `insular sources` - where to find manuscript data

use insular_core::{MAX_YEAR, MIN_YEAR, TARGET_REGION};

const RULE: &str =
    "---------------------------------------------------------------------------------";

const GUIDANCE: &str = "\
This tool CANNOT query these sources directly for a statistical summary.
Consult them to compile the CSV that `insular analyze` reads.

1. Foundational bibliographical reference (identifies the corpus of manuscripts):
   - Gneuss, Helmut, and Michael Lapidge. 'Anglo-Saxon Manuscripts: A Bibliographical
     Handlist of Manuscripts and Manuscript Fragments Written or Owned in England up
     to 1100.' Toronto: University of Toronto Press, 2014.

2. Library catalogues and digital collections (dating and illustration status):
   - British Library
     - Explore Archives and Manuscripts: search.bl.uk
     - Digitised Manuscripts: www.bl.uk/manuscripts
     - Catalogue of Illuminated Manuscripts: www.bl.uk/catalogues/illuminatedmanuscripts
     - Medieval England and France, 700-1200: www.bl.uk/projects/france-england-medieval-manuscripts-700-1200
   - Bodleian Libraries, University of Oxford
     - Bodleian Archives & Manuscripts: search.bodleian.ox.ac.uk
     - Digital Bodleian: digital.bodleian.ox.ac.uk
   - Cambridge University Library and college libraries
     - Cambridge University Digital Library: cudl.lib.cam.ac.uk
     - Parker Library on the Web (Corpus Christi College): parkerweb.stanford.edu
   - Digital Scriptorium (digital-scriptorium.org): union catalogue of pre-modern
     manuscripts, mainly in North American collections.

3. Projects:
   - 'Insular Manuscripts: Networks of Knowledge' (Leverhulme Trust, with the
     British Library). Covers 650-850 CE.

Method:
   a. Use Gneuss & Lapidge to identify manuscripts produced in the date range.
   b. Look each one up in the library catalogues above.
   c. Record whether the catalogue entry describes illustrations or illuminations.
";

/// Guidance text, header included
pub fn guidance() -> String {
    format!(
        "{RULE}\nPrimary Data Sources for Researching Insular Manuscripts \
         ({TARGET_REGION}, {MIN_YEAR}-{MAX_YEAR} CE)\n{RULE}\n{GUIDANCE}{RULE}"
    )
}

pub fn run() {
    println!("{}", guidance());
}
