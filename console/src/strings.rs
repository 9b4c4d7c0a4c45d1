macro_rules! define_strings {
    (
        $($name:ident = $value:literal);*$(;)?
    ) => {
        $(
            pub const $name: &str = $value;
        )*
    };
}

pub mod scan {
    define_strings! {
        GFF =
            "Path to the GFF feature table. Lines starting with '#' are \
            skipped, every other line must have 9 tab separated columns.";
        FASTA =
            "Path to the genome FASTA. Sequence identifiers must match the \
            first column of the GFF.";
        OUT_FASTA =
            "Output FASTA with the flank-expanded window of every hit.";
        OUT_INFO =
            "Output table with coordinates, inverted repeats and target site \
            duplications of every hit.";
        OUT_DENSITY =
            "Output table with hit counts per window.";
        OUT_SUMMARY =
            "Output table with total hits and hits per 10 kb for every \
            replicon.";
        OUT_DIR =
            "Directory to place relative output paths in. Created if missing.";
        FLANK =
            "Bases added on each side of a feature before repeat detection.";
        IR_MIN =
            "Minimal inverted repeat length.";
        IR_MAX =
            "Maximal inverted repeat length. Longer repeats are preferred.";
        IR_RATIO =
            "Fraction of an inverted repeat that may mismatch. At least one \
            mismatch is always allowed.";
        TSD_MIN =
            "Minimal target site duplication length.";
        TSD_MAX =
            "Maximal target site duplication length. Longer duplications are \
            preferred.";
        TSD_MISMATCHES =
            "Mismatches allowed in a target site duplication.";
        WINDOW =
            "Window size for the density table.";
    }
}

pub mod utils {
    define_strings! {
        THREADS =
            "Number of threads to use. 0 uses all available cores.";
        VERBOSE =
            "Log skipped lines and intermediate results.";
        PROGRESS =
            "Display a progress spinner.";
    }
}
