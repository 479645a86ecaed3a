use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use nalgebra::Vector3;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use diffuse_maps::grid::{Bins, VoxelGrid};
use diffuse_maps::maps::{symmetrize, weighted_correlation};
use diffuse_maps::resolution::{CellConstants, ResolutionCalculator, SpaceGroupTable};
use diffuse_maps::symmetries::{
    generate_symmetry_indices, index_operators, rotation_from_rows, LaueClass,
    SymmetryIndexTable, SymmetryOperatorSet,
};

#[derive(Parser)]
#[command(name = "diffuse-maps")]
#[command(about = "Symmetrize, compare and resolve 3D diffuse-scattering maps")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute d-spacings for scattering vectors or for every voxel of a grid
    Resolution {
        /// Space-group number
        #[arg(long)]
        space_group: u16,

        /// Cell constants a,b,c,alpha,beta,gamma (angles in degrees)
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        cell: Vec<f64>,

        /// JSON array of [h, k, l] triples
        #[arg(long, conflicts_with = "bins", required_unless_present = "bins")]
        vectors: Option<PathBuf>,

        /// JSON bins {"h": [...], "k": [...], "l": [...]}; d-spacings follow grid order
        #[arg(long)]
        bins: Option<PathBuf>,

        /// Lowest space group that uses the hexagonal formula (143 covers trigonal groups)
        #[arg(long)]
        hexagonal_lower_bound: Option<u16>,

        /// JSON space-group table replacing the built-in ranges
        #[arg(long)]
        space_group_table: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build the symmetry index table and multiplicities for a grid
    Indices {
        /// JSON array of 3x3 row-major operators; the second half must be the Friedel mates of the first
        #[arg(long, conflicts_with = "laue_class", required_unless_present = "laue_class")]
        operators: Option<PathBuf>,

        /// Laue class symbol, e.g. mmm or m-3m (trigonal and hexagonal classes are rejected)
        #[arg(long, allow_hyphen_values = true)]
        laue_class: Option<LaueClass>,

        /// JSON bins {"h": [...], "k": [...], "l": [...]}
        #[arg(long)]
        bins: PathBuf,

        /// Oversampling relative to integer Miller indices
        #[arg(long, default_value = "1.0")]
        subsampling: f64,

        /// Output file for the index table
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Symmetrize an intensity map with a cached index table
    Symmetrize {
        /// Index table written by `indices`
        #[arg(long)]
        table: PathBuf,

        /// JSON array with one intensity per voxel
        #[arg(long)]
        map: PathBuf,

        /// Treat the map as asymmetric-unit data and sum equivalents
        #[arg(long)]
        from_asu: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Weighted correlation coefficient between two symmetrized maps
    Correlate {
        #[arg(long)]
        map1: PathBuf,

        #[arg(long)]
        map2: PathBuf,

        /// Index table whose multiplicities weight the voxels
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// List the supported Laue classes
    LaueClasses,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            log::warn!(
                "Thread count {} specified but parallel feature not enabled. Ignoring.",
                threads
            );
        }
    }

    debug!("Starting diffuse-maps v{}", diffuse_maps::VERSION);

    match cli.command {
        Commands::Resolution {
            space_group,
            cell,
            vectors,
            bins,
            hexagonal_lower_bound,
            space_group_table,
            output,
        } => {
            let cell = CellConstants::from_slice(&cell)?;
            let mut table = match space_group_table {
                Some(path) => read_json::<SpaceGroupTable>(&path)?,
                None => SpaceGroupTable::default(),
            };
            if let Some(bound) = hexagonal_lower_bound {
                table = table.with_hexagonal_lower_bound(bound);
            }
            let vectors: Vec<Vector3<f64>> = match (vectors, bins) {
                (Some(path), _) => read_json::<Vec<[f64; 3]>>(&path)?
                    .into_iter()
                    .map(Vector3::from)
                    .collect(),
                (None, Some(path)) => VoxelGrid::new(&read_json::<Bins>(&path)?)?
                    .vectors()
                    .to_vec(),
                (None, None) => anyhow::bail!("Either --vectors or --bins is required"),
            };
            info!(
                "Computing d-spacings for {} vectors in space group {}",
                vectors.len(),
                space_group
            );
            let d_spacings = ResolutionCalculator::new(table).compute(space_group, &cell, &vectors);
            write_json(&d_spacings, output.as_deref())
        }
        Commands::Indices {
            operators,
            laue_class,
            bins,
            subsampling,
            output,
        } => {
            let operators = match (operators, laue_class) {
                (Some(path), _) => {
                    let rows = read_json::<Vec<[[f64; 3]; 3]>>(&path)?;
                    SymmetryOperatorSet::from_positional(rows.iter().map(rotation_from_rows).collect())?
                }
                (None, Some(class)) => index_operators(class)
                    .with_context(|| format!("Cannot index a Cartesian grid in Laue class {}", class))?,
                (None, None) => anyhow::bail!("Either --operators or --laue-class is required"),
            };
            let bins = read_json::<Bins>(&bins)?;
            info!(
                "Indexing {} voxels under {} operators",
                bins.voxel_count(),
                operators.len()
            );
            let (table, _) = generate_symmetry_indices(&operators, &bins, subsampling)?;
            fs::write(&output, table.to_json()?)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Index table written to {}", output.display());
            Ok(())
        }
        Commands::Symmetrize {
            table,
            map,
            from_asu,
            output,
        } => {
            let table = read_table(&table)?;
            let map = read_json::<Vec<f64>>(&map)?;
            info!(
                "Symmetrizing {} voxels ({} mode)",
                map.len(),
                if from_asu { "asymmetric-unit" } else { "unit-cell" }
            );
            let symmetrized = symmetrize(&map, &table, from_asu)?;
            write_json(&symmetrized, output.as_deref())
        }
        Commands::Correlate { map1, map2, table } => {
            let map1 = read_json::<Vec<f64>>(&map1)?;
            let map2 = read_json::<Vec<f64>>(&map2)?;
            let table = table.as_deref().map(read_table).transpose()?;
            let cc = weighted_correlation(
                &map1,
                &map2,
                table.as_ref().map(|t| t.multiplicities()),
            )?;
            info!("Weighted correlation coefficient: {:.4}", cc);
            println!("{}", cc);
            Ok(())
        }
        Commands::LaueClasses => {
            for class in LaueClass::ALL {
                let note = if class.uses_hexagonal_axes() {
                    "  (hexagonal axes, not indexable on Cartesian grids)"
                } else {
                    ""
                };
                println!("{:<6} {:>3} operators{}", class.symbol(), class.order(), note);
            }
            Ok(())
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn read_table(path: &Path) -> anyhow::Result<SymmetryIndexTable> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    SymmetryIndexTable::from_json(&text)
        .with_context(|| format!("Invalid index table {}", path.display()))
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string(value)?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Result written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
