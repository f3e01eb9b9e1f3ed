use crate::{
    interpolation::{grid::meshgrid_from_fn, interpolate_pixel, InterpolationMode},
    parallel,
};

use augbox_image::{Image, ImageError};

#[rustfmt::skip]
fn determinant3x3(m: &[f32; 9]) -> f32 {
    m[0] * (m[4] * m[8] - m[5] * m[7]) -
    m[1] * (m[3] * m[8] - m[5] * m[6]) +
    m[2] * (m[3] * m[7] - m[4] * m[6])
}

#[rustfmt::skip]
fn adjugate3x3(m: &[f32; 9]) -> [f32; 9] {
    [
        m[4] * m[8] - m[5] * m[7],  // [0, 0]
        m[2] * m[7] - m[1] * m[8],  // [0, 1]
        m[1] * m[5] - m[2] * m[4],  // [0, 2]
        m[5] * m[6] - m[3] * m[8],  // [1, 0]
        m[0] * m[8] - m[2] * m[6],  // [1, 1]
        m[2] * m[3] - m[0] * m[5],  // [1, 2]
        m[3] * m[7] - m[4] * m[6],  // [2, 0]
        m[1] * m[6] - m[0] * m[7],  // [2, 1]
        m[0] * m[4] - m[1] * m[3],  // [2, 2]
    ]
}

fn inverse_perspective_matrix(m: &[f32; 9]) -> Result<[f32; 9], ImageError> {
    let det = determinant3x3(m);

    if det == 0.0 {
        return Err(ImageError::CannotComputeDeterminant);
    }

    let adj = adjugate3x3(m);
    let inv_det = 1.0 / det;

    let mut inv_m = [0.0; 9];
    for i in 0..9 {
        inv_m[i] = adj[i] * inv_det;
    }

    Ok(inv_m)
}

#[rustfmt::skip]
fn matmul3x3(a: &[f32; 9], b: &[f32; 9]) -> [f32; 9] {
    [
        a[0] * b[0] + a[1] * b[3] + a[2] * b[6],
        a[0] * b[1] + a[1] * b[4] + a[2] * b[7],
        a[0] * b[2] + a[1] * b[5] + a[2] * b[8],
        a[3] * b[0] + a[4] * b[3] + a[5] * b[6],
        a[3] * b[1] + a[4] * b[4] + a[5] * b[7],
        a[3] * b[2] + a[4] * b[5] + a[5] * b[8],
        a[6] * b[0] + a[7] * b[3] + a[8] * b[6],
        a[6] * b[1] + a[7] * b[4] + a[8] * b[7],
        a[6] * b[2] + a[7] * b[5] + a[8] * b[8],
    ]
}

/// Homography mapping the unit square to the given quadrilateral.
///
/// Corner order: top-left, top-right, bottom-right, bottom-left, i.e.
/// (0,0) -> q[0], (1,0) -> q[1], (1,1) -> q[2], (0,1) -> q[3].
fn square_to_quad(q: &[(f32, f32); 4]) -> Result<[f32; 9], ImageError> {
    let [(x0, y0), (x1, y1), (x2, y2), (x3, y3)] = *q;

    let sum_x = x0 - x1 + x2 - x3;
    let sum_y = y0 - y1 + y2 - y3;

    if sum_x == 0.0 && sum_y == 0.0 {
        // the quad is a parallelogram, the mapping is affine
        return Ok([x1 - x0, x3 - x0, x0, y1 - y0, y3 - y0, y0, 0.0, 0.0, 1.0]);
    }

    let dx1 = x1 - x2;
    let dx2 = x3 - x2;
    let dy1 = y1 - y2;
    let dy2 = y3 - y2;

    // collinear corners collapse the quad, there is no homography
    let den = dx1 * dy2 - dx2 * dy1;
    if den == 0.0 {
        return Err(ImageError::CannotComputeDeterminant);
    }

    let g = (sum_x * dy2 - sum_y * dx2) / den;
    let h = (dx1 * sum_y - dy1 * sum_x) / den;

    Ok([
        x1 - x0 + g * x1,
        x3 - x0 + h * x3,
        x0,
        y1 - y0 + g * y1,
        y3 - y0 + h * y3,
        y0,
        g,
        h,
        1.0,
    ])
}

/// Computes the 3x3 perspective matrix mapping four source points to four
/// destination points.
///
/// Both point arrays are ordered top-left, top-right, bottom-right,
/// bottom-left. The matrix is built as the square-to-quad mapping of the
/// destination composed with the inverse square-to-quad mapping of the
/// source.
///
/// # Errors
///
/// Returns an error if either quadrilateral is degenerate (three or more
/// collinear corners), making the mapping singular.
pub fn get_perspective_transform(
    src: &[(f32, f32); 4],
    dst: &[(f32, f32); 4],
) -> Result<[f32; 9], ImageError> {
    let src_m = square_to_quad(src)?;
    let dst_m = square_to_quad(dst)?;

    let src_m_inv = inverse_perspective_matrix(&src_m)?;

    Ok(matmul3x3(&dst_m, &src_m_inv))
}

/// Applies a 3x3 perspective transformation to a point.
pub fn transform_point_perspective(x: f32, y: f32, m: &[f32; 9]) -> (f32, f32) {
    let w = m[6] * x + m[7] * y + m[8];
    let u = (m[0] * x + m[1] * y + m[2]) / w;
    let v = (m[3] * x + m[4] * y + m[5]) / w;
    (u, v)
}

/// Applies a perspective transformation to an image.
///
/// Destination pixels that map outside the source frame keep the value
/// the destination buffer was initialized with.
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (height, width, channels).
/// * `m` - The 3x3 perspective transformation matrix src -> dst.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use augbox_image::{Image, ImageSize};
/// use augbox_imgproc::interpolation::InterpolationMode;
/// use augbox_imgproc::warp::warp_perspective;
///
/// let src = Image::<f32, 1>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0.0f32; 4 * 5],
/// ).unwrap();
///
/// let m = [1.0, 0.0, -1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0];
///
/// let mut dst = Image::<f32, 1>::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     0.0,
/// ).unwrap();
///
/// warp_perspective(&src, &mut dst, &m, InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(dst.size().width, 2);
/// assert_eq!(dst.size().height, 3);
/// ```
pub fn warp_perspective<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    m: &[f32; 9],
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    // inverse perspective matrix to find corresponding positions in src from dst
    let inv_m = inverse_perspective_matrix(m)?;

    // create meshgrid to find corresponding positions in dst from src
    let (dst_rows, dst_cols) = (dst.rows(), dst.cols());
    let (map_x, map_y) = meshgrid_from_fn(dst_cols, dst_rows, |x, y| {
        transform_point_perspective(x as f32, y as f32, &inv_m)
    });

    // apply perspective transformation
    parallel::par_iter_rows_resample(dst, &map_x, &map_y, |&x, &y, dst_pixel| {
        if x >= 0.0f32 && x < src.cols() as f32 && y >= 0.0f32 && y < src.rows() as f32 {
            dst_pixel
                .iter_mut()
                .enumerate()
                .for_each(|(k, pixel)| *pixel = interpolate_pixel(src, x, y, k, interpolation));
        }
    });

    Ok(())
}
