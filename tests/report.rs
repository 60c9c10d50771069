use std::fs;
use std::path::Path;

use gbstat::errors::BuildError;
use gbstat::report::build;
use gbstat::report::ReportConfig;

const HYPOTHETICAL_GENOME: &str = "\
LOCUS       NC_000001               1200 bp    DNA     linear   BCT 01-JAN-2020
FEATURES             Location/Qualifiers
     source          1..1200
                     /organism=\"Example bacterium\"
     gene            1..300
                     /locus_tag=\"EX_0001\"
     CDS             1..300
                     /locus_tag=\"EX_0001\"
                     /product=\"hypothetical protein\"
                     /translation=\"MKVLAAGIVGLLLAPQ
                     GENE=PRODUCT=hypotheticalprotein\"
     CDS             400..900
                     /locus_tag=\"EX_0002\"
                     /gene=\"polA\"
                     /product=\"DNA polymerase I\"
                     /translation=\"MVQIPQNPLILVDGSSYLYRAYHAFPPLTNSAGEPTGAMYGVLNMLRS\"
     tRNA            1000..1075
                     /product=\"tRNA-Ala\"
                     /gene=\"alaT\"
ORIGIN
        1 atgaaagtgc tggcggcggg
//
";

const EMPTY_GENOME: &str = "\
LOCUS       NC_000002                 60 bp    DNA     linear   BCT 01-JAN-2020
FEATURES             Location/Qualifiers
     source          1..60
ORIGIN
//
";

fn config(root: &Path, src: &Path) -> ReportConfig {
    ReportConfig {
        src: src.to_path_buf(),
        table: root.join("out").join("summary.csv"),
        chart: root.join("out").join("summary.svg"),
    }
}

#[test]
fn report_over_directory_writes_both_artifacts() {
    let root = tempfile::tempdir().unwrap();
    let src = root.path().join("genomes");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("example.gbk"), HYPOTHETICAL_GENOME).unwrap();
    fs::write(src.join("README.txt"), HYPOTHETICAL_GENOME).unwrap();

    let config = config(root.path(), &src);
    let table = build(&config).unwrap();

    assert_eq!(table.rows().len(), 1);
    let record = table.rows()[0].record;
    assert_eq!(record.cds_count, 2);
    assert_eq!(record.product_count, 2);
    assert_eq!(record.gene_count, 1);
    assert_eq!(record.hypothetical_protein_count, 1);
    assert_eq!(record.non_hypothetical_gene_count, 1);

    let csv = fs::read_to_string(&config.table).unwrap();
    assert_eq!(
        csv,
        "Genome,CDS Count,Product Count,Gene Count,\
         Hypothetical Protein Count,Non-Hypothetical Gene Count\n\
         example,2,2,1,1,1\n"
    );

    let svg = fs::read_to_string(&config.chart).unwrap();
    assert!(svg.contains(">example</text>"));
    assert_eq!(svg.matches(">50.0%</text>").count(), 2);
}

#[test]
fn report_skips_labels_for_genomes_without_products() {
    let root = tempfile::tempdir().unwrap();
    let src = root.path().join("genomes");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("empty.gbk"), EMPTY_GENOME).unwrap();

    let config = config(root.path(), &src);
    let table = build(&config).unwrap();
    assert_eq!(table.rows().len(), 1);

    let svg = fs::read_to_string(&config.chart).unwrap();
    assert!(svg.contains(">empty</text>"));
    assert!(svg.contains("class=\"segment hypothetical\""));
    assert!(!svg.contains("class=\"label\""));
}

#[test]
fn report_over_empty_directory_writes_empty_artifacts() {
    let root = tempfile::tempdir().unwrap();
    let src = root.path().join("genomes");
    fs::create_dir(&src).unwrap();

    let config = config(root.path(), &src);
    let table = build(&config).unwrap();
    assert!(table.is_empty());

    let csv = fs::read_to_string(&config.table).unwrap();
    assert_eq!(csv.lines().count(), 1);

    let svg = fs::read_to_string(&config.chart).unwrap();
    assert!(!svg.contains("class=\"segment"));
}

#[test]
fn report_over_missing_directory_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let config = config(root.path(), &root.path().join("does-not-exist"));

    let result = build(&config);
    assert!(matches!(
        result,
        Err(BuildError::DirectoryUnavailable { .. })
    ));
    assert!(!config.table.exists());
    assert!(!config.chart.exists());
}

#[test]
fn report_is_reproducible() {
    let root = tempfile::tempdir().unwrap();
    let src = root.path().join("genomes");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("example.gbk"), HYPOTHETICAL_GENOME).unwrap();

    let config = config(root.path(), &src);

    build(&config).unwrap();
    let first_table = fs::read(&config.table).unwrap();
    let first_chart = fs::read(&config.chart).unwrap();

    build(&config).unwrap();
    assert_eq!(fs::read(&config.table).unwrap(), first_table);
    assert_eq!(fs::read(&config.chart).unwrap(), first_chart);
}

#[test]
fn report_holds_count_invariants_for_every_row() {
    let root = tempfile::tempdir().unwrap();
    let src = root.path().join("genomes");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("one.gbk"), HYPOTHETICAL_GENOME).unwrap();
    fs::write(src.join("two.gbk"), EMPTY_GENOME).unwrap();
    fs::write(
        src.join("three.gbk"),
        "CDS 1..3\n/product=\"x\"\n/product=\"y\"\nCDS 4..6\nCDS 7..9\n/product=\"hypothetical protein\"\n",
    )
    .unwrap();

    let table = build(&config(root.path(), &src)).unwrap();
    assert_eq!(table.rows().len(), 3);

    for row in table.rows() {
        let r = &row.record;
        assert_eq!(
            r.product_count,
            r.hypothetical_protein_count + r.non_hypothetical_gene_count
        );
        assert!(r.product_count <= r.cds_count);
    }
}
