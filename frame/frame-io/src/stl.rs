//! Binary STL reading and writing.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use frame_types::{Point3, Triangle, TriangleSoup};

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL (normal + 3 vertices + attribute).
pub const TRIANGLE_SIZE: usize = 50;

/// Upper bound on triangles preallocated from a file's count field.
///
/// The count is untrusted input: a corrupt header can claim
/// `u32::MAX` records, which must not translate into a multi-gigabyte
/// allocation before the first record is read. Reading still honors
/// the full count; a lying header is caught by the truncation check.
const MAX_PREALLOC_TRIANGLES: usize = 1 << 16;

/// Write a triangle soup as binary STL to any [`Write`] sink.
///
/// `label` becomes the 80-byte header: encoded as ASCII bytes, padded
/// with spaces, and truncated (never overflowed) if longer than 80
/// bytes. The triangle count is the exact soup length; each record
/// carries the *unnormalized* cross-product normal (see the crate
/// docs).
///
/// Serialization itself cannot fail on well-formed input; the only
/// failure mode is the sink refusing bytes.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the sink fails.
pub fn write_stl<W: Write>(soup: &TriangleSoup, mut writer: W, label: &str) -> IoResult<()> {
    let mut header = [b' '; HEADER_SIZE];
    let text = label.as_bytes();
    let len = text.len().min(HEADER_SIZE);
    header[..len].copy_from_slice(&text[..len]);
    writer.write_all(&header)?;

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: soups beyond u32::MAX triangles are unsupported by the format
    let count = soup.triangle_count() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for tri in soup {
        let normal = tri.normal_unnormalized();
        write_vector(&mut writer, normal.x, normal.y, normal.z)?;
        for v in tri.vertices() {
            write_vector(&mut writer, v.x, v.y, v.z)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Save a triangle soup to a binary STL file.
///
/// The soup is written through a [`BufWriter`] in one sequential pass;
/// the file handle is released on every exit path. A mid-write failure
/// leaves no partial-success guarantee: the file as a whole is invalid
/// and should be discarded.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use frame_io::save_stl;
/// use frame_types::TriangleSoup;
///
/// let soup = TriangleSoup::new();
/// save_stl(&soup, "model.stl", "my model").unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(soup: &TriangleSoup, path: P, label: &str) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_stl(soup, &mut writer, label)?;
    writer.flush()?;
    Ok(())
}

/// Load a triangle soup from a binary STL file.
///
/// Triangles are reconstructed from the vertex fields; the stored
/// normal of each record is skipped, since normals are always derived
/// from winding on this side.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist
/// - [`IoError::InvalidHeader`] if the file is shorter than 84 bytes
/// - [`IoError::InvalidTriangleCount`] if records are truncated
/// - [`IoError::Io`] for any other read failure
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<TriangleSoup> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    let mut reader = BufReader::new(file);

    let mut header = [0u8; HEADER_SIZE + 4];
    let got = read_up_to(&mut reader, &mut header)?;
    if got < header.len() {
        return Err(IoError::InvalidHeader {
            expected: HEADER_SIZE + 4,
            got,
        });
    }

    let count = u32::from_le_bytes([
        header[HEADER_SIZE],
        header[HEADER_SIZE + 1],
        header[HEADER_SIZE + 2],
        header[HEADER_SIZE + 3],
    ]);

    let mut soup = TriangleSoup::with_capacity((count as usize).min(MAX_PREALLOC_TRIANGLES));
    let mut record = [0u8; TRIANGLE_SIZE];
    for i in 0..count {
        let got = read_up_to(&mut reader, &mut record)?;
        if got < TRIANGLE_SIZE {
            return Err(IoError::InvalidTriangleCount {
                expected: count,
                got: i,
            });
        }

        // Skip the normal (bytes 0..12), take the three vertices.
        soup.push(Triangle::new(
            read_point(&record[12..24]),
            read_point(&record[24..36]),
            read_point(&record[36..48]),
        ));
    }

    Ok(soup)
}

/// Fill `buf` as far as the reader allows, returning the bytes read.
///
/// Unlike `read_exact`, a short read is reported as a length rather
/// than an error, so callers can map it to a format-level error.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> IoResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

/// Read a point from 12 bytes (3 little-endian f32s).
fn read_point(buf: &[u8]) -> Point3<f64> {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Point3::new(f64::from(x), f64::from(y), f64::from(z))
}

/// Write three coordinates as little-endian f32s.
///
/// Geometry is f64 internally; the narrowing happens only here, at the
/// byte boundary the format demands.
fn write_vector<W: Write>(writer: &mut W, x: f64, y: f64, z: f64) -> IoResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: f64 to f32 is what the STL format stores
    {
        writer.write_all(&(x as f32).to_le_bytes())?;
        writer.write_all(&(y as f32).to_le_bytes())?;
        writer.write_all(&(z as f32).to_le_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_possible_truncation, clippy::float_cmp)]
mod tests {
    use super::*;

    fn two_triangle_soup() -> TriangleSoup {
        let mut soup = TriangleSoup::new();
        soup.push(Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ));
        soup.push(Triangle::new(
            Point3::new(1.5, -0.25, 3.0),
            Point3::new(4.0, 0.5, 3.0),
            Point3::new(1.5, 2.0, 7.5),
        ));
        soup
    }

    #[test]
    fn byte_length_is_84_plus_50_per_triangle() {
        let soup = two_triangle_soup();
        let mut bytes = Vec::new();
        write_stl(&soup, &mut bytes, "test").unwrap();
        assert_eq!(bytes.len(), 84 + 50 * 2);

        let empty = TriangleSoup::new();
        let mut bytes = Vec::new();
        write_stl(&empty, &mut bytes, "test").unwrap();
        assert_eq!(bytes.len(), 84);
    }

    #[test]
    fn header_is_label_padded_with_spaces() {
        let mut bytes = Vec::new();
        write_stl(&TriangleSoup::new(), &mut bytes, "quad frame").unwrap();
        assert_eq!(&bytes[..10], b"quad frame");
        assert!(bytes[10..HEADER_SIZE].iter().all(|&b| b == b' '));
    }

    #[test]
    fn oversized_label_is_truncated_not_overflowed() {
        let label = "x".repeat(200);
        let mut bytes = Vec::new();
        write_stl(&TriangleSoup::new(), &mut bytes, &label).unwrap();
        assert!(bytes[..HEADER_SIZE].iter().all(|&b| b == b'x'));
        // Count field must start exactly at offset 80.
        assert_eq!(&bytes[HEADER_SIZE..HEADER_SIZE + 4], &0u32.to_le_bytes());
    }

    #[test]
    fn count_field_matches_soup_length() {
        let soup = two_triangle_soup();
        let mut bytes = Vec::new();
        write_stl(&soup, &mut bytes, "test").unwrap();
        let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap());
        assert_eq!(count, 2);
    }

    #[test]
    fn normals_are_raw_cross_products() {
        let soup = two_triangle_soup();
        let mut bytes = Vec::new();
        write_stl(&soup, &mut bytes, "test").unwrap();

        for (i, tri) in soup.triangles().iter().enumerate() {
            let record = &bytes[84 + i * TRIANGLE_SIZE..];
            let n = tri.normal_unnormalized();
            let nx = f32::from_le_bytes(record[0..4].try_into().unwrap());
            let ny = f32::from_le_bytes(record[4..8].try_into().unwrap());
            let nz = f32::from_le_bytes(record[8..12].try_into().unwrap());
            // Bit-exact against the f32-narrowed cross product, with no
            // normalization in between.
            assert_eq!(nx.to_bits(), (n.x as f32).to_bits());
            assert_eq!(ny.to_bits(), (n.y as f32).to_bits());
            assert_eq!(nz.to_bits(), (n.z as f32).to_bits());
        }
    }

    #[test]
    fn degenerate_triangle_writes_zero_normal() {
        let mut soup = TriangleSoup::new();
        soup.push(Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ));
        let mut bytes = Vec::new();
        write_stl(&soup, &mut bytes, "degenerate").unwrap();
        assert!(bytes[84..96].iter().all(|&b| b == 0));
    }

    #[test]
    fn attribute_field_is_zero() {
        let soup = two_triangle_soup();
        let mut bytes = Vec::new();
        write_stl(&soup, &mut bytes, "test").unwrap();
        assert_eq!(&bytes[84 + 48..84 + 50], &[0, 0]);
        assert_eq!(&bytes[84 + 50 + 48..84 + 100], &[0, 0]);
    }

    #[test]
    fn roundtrip_preserves_vertices_bit_for_bit() {
        let soup = two_triangle_soup();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.stl");

        save_stl(&soup, &path, "roundtrip").unwrap();
        let loaded = load_stl(&path).unwrap();

        assert_eq!(loaded.triangle_count(), soup.triangle_count());
        for (orig, back) in soup.triangles().iter().zip(loaded.triangles()) {
            for (o, b) in orig.vertices().iter().zip(&back.vertices()) {
                // The file stores f32; compare at that precision.
                assert_eq!((o.x as f32).to_bits(), (b.x as f32).to_bits());
                assert_eq!((o.y as f32).to_bits(), (b.y as f32).to_bits());
                assert_eq!((o.z as f32).to_bits(), (b.z as f32).to_bits());
            }
        }
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load_stl("no_such_file_981234.stl").unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn load_truncated_header_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.stl");
        std::fs::write(&path, b"solid? no.").unwrap();

        let err = load_stl(&path).unwrap_err();
        assert!(matches!(err, IoError::InvalidHeader { got: 10, .. }));
    }

    #[test]
    fn lying_count_field_fails_without_huge_allocation() {
        // Header claims u32::MAX triangles but carries none; the
        // loader must reject it quickly instead of preallocating
        // ~300 GB on the count's say-so.
        let mut bytes = vec![b' '; HEADER_SIZE];
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lying_count.stl");
        std::fs::write(&path, &bytes).unwrap();

        let err = load_stl(&path).unwrap_err();
        assert!(matches!(
            err,
            IoError::InvalidTriangleCount {
                expected: u32::MAX,
                got: 0
            }
        ));
    }

    #[test]
    fn load_truncated_records_fails_with_counts() {
        let soup = two_triangle_soup();
        let mut bytes = Vec::new();
        write_stl(&soup, &mut bytes, "truncated").unwrap();
        bytes.truncate(84 + 50 + 25); // half of the second record

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated.stl");
        std::fs::write(&path, &bytes).unwrap();

        let err = load_stl(&path).unwrap_err();
        assert!(matches!(
            err,
            IoError::InvalidTriangleCount {
                expected: 2,
                got: 1
            }
        ));
    }
}
