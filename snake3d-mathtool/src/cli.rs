use clap::{Parser, Subcommand, ValueEnum};

/// Square matrix sizes the tool accepts, by element count.
const SUPPORTED_ELEMENT_COUNTS: [usize; 3] = [4, 9, 16];

#[derive(Parser, Debug)]
#[command(
    name = "snake3d-mathtool",
    about = "Matrix and transform calculator for the snake3d math library",
    long_about = "Inverts and multiplies small square matrices and prints the transform, view and projection matrices the snake3d renderer builds"
)]
pub struct Cli {
    /// Digits printed after the decimal point
    #[arg(short = 'p', long, default_value = "4", value_name = "DIGITS", global = true)]
    pub precision: usize,

    /// Log intermediate steps
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Invert a 2x2, 3x3 or 4x4 matrix given in row-major order
    Invert {
        #[arg(
            value_name = "ELEMENTS",
            required = true,
            value_delimiter = ',',
            allow_negative_numbers = true
        )]
        elements: Vec<f64>,
    },

    /// Multiply two square matrices of the same size
    Multiply {
        /// Left-hand matrix, row-major
        #[arg(
            long,
            value_name = "ELEMENTS",
            required = true,
            value_delimiter = ',',
            allow_negative_numbers = true
        )]
        lhs: Vec<f64>,

        /// Right-hand matrix, row-major
        #[arg(
            long,
            value_name = "ELEMENTS",
            required = true,
            value_delimiter = ',',
            allow_negative_numbers = true
        )]
        rhs: Vec<f64>,
    },

    /// Build a 4x4 transform and optionally apply it to a point
    Transform {
        #[arg(value_enum)]
        kind: TransformKind,

        /// Rotation angle in degrees
        #[arg(short = 'a', long, default_value = "0.0", allow_negative_numbers = true)]
        angle: f64,

        /// Offset, scale factors, Euler angles in degrees, or rotation axis
        #[arg(long, value_name = "X,Y,Z", value_delimiter = ',', allow_negative_numbers = true)]
        vector: Vec<f64>,

        /// Point to transform
        #[arg(long, value_name = "X,Y,Z", value_delimiter = ',', allow_negative_numbers = true)]
        point: Vec<f64>,
    },

    /// Build a view matrix
    View {
        /// Camera position
        #[arg(
            long,
            value_name = "X,Y,Z",
            required = true,
            value_delimiter = ',',
            allow_negative_numbers = true
        )]
        position: Vec<f64>,

        /// Viewing direction, normalized before use
        #[arg(
            long,
            value_name = "X,Y,Z",
            required = true,
            value_delimiter = ',',
            allow_negative_numbers = true
        )]
        look: Vec<f64>,

        /// Approximate up direction
        #[arg(
            long,
            value_name = "X,Y,Z",
            value_delimiter = ',',
            default_values_t = [0.0, 1.0, 0.0],
            allow_negative_numbers = true
        )]
        up: Vec<f64>,
    },

    /// Build a perspective projection matrix
    Perspective {
        /// Vertical field of view in degrees
        #[arg(long, default_value = "80.0")]
        fov: f64,

        /// Viewport width divided by height
        #[arg(long, default_value = "1.333")]
        aspect: f64,

        #[arg(long, default_value = "1.0")]
        near: f64,

        #[arg(long, default_value = "200.0")]
        far: f64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformKind {
    Translation,
    Scaling,
    RotationX,
    RotationY,
    RotationZ,
    RotationXyz,
    RotationAxis,
}

impl TransformKind {
    /// Whether the transform is built from `--vector`.
    pub fn needs_vector(self) -> bool {
        !matches!(self, Self::RotationX | Self::RotationY | Self::RotationZ)
    }
}

impl Cli {
    /// Validates the CLI arguments
    pub fn validate(&self) -> Result<(), String> {
        if self.precision > 12 {
            return Err("Precision must be at most 12 digits".to_string());
        }

        match &self.command {
            Command::Invert { elements } => validate_square(elements, "Matrix"),
            Command::Multiply { lhs, rhs } => {
                validate_square(lhs, "Left-hand matrix")?;
                validate_square(rhs, "Right-hand matrix")?;
                if lhs.len() != rhs.len() {
                    return Err(format!(
                        "Matrices differ in size: {} and {} elements",
                        lhs.len(),
                        rhs.len()
                    ));
                }
                Ok(())
            }
            Command::Transform { kind, vector, point, .. } => {
                if kind.needs_vector() {
                    validate_vector3(vector, "--vector")?;
                    if *kind == TransformKind::RotationAxis && vector.iter().all(|&c| c == 0.0) {
                        return Err("Rotation axis must not be zero".to_string());
                    }
                }
                if !point.is_empty() {
                    validate_vector3(point, "--point")?;
                }
                Ok(())
            }
            Command::View { position, look, up } => {
                validate_vector3(position, "--position")?;
                validate_vector3(look, "--look")?;
                validate_vector3(up, "--up")?;
                if look.iter().all(|&c| c == 0.0) {
                    return Err("Look direction must not be zero".to_string());
                }
                Ok(())
            }
            Command::Perspective { fov, aspect, near, far } => {
                if *fov <= 0.0 || *fov >= 180.0 {
                    return Err("Field of view must be between 0 and 180 degrees".to_string());
                }
                if *aspect <= 0.0 {
                    return Err("Aspect ratio must be positive".to_string());
                }
                if *near <= 0.0 || *far <= *near {
                    return Err("Clip planes must satisfy 0 < near < far".to_string());
                }
                Ok(())
            }
        }
    }
}

fn validate_square(elements: &[f64], name: &str) -> Result<(), String> {
    if SUPPORTED_ELEMENT_COUNTS.contains(&elements.len()) {
        Ok(())
    } else {
        Err(format!(
            "{name} must have 4, 9 or 16 elements, got {}",
            elements.len()
        ))
    }
}

fn validate_vector3(components: &[f64], flag: &str) -> Result<(), String> {
    if components.len() == 3 {
        Ok(())
    } else {
        Err(format!("{flag} takes exactly 3 components, got {}", components.len()))
    }
}
