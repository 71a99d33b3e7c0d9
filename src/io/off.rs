// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use num_traits::ToPrimitive;

use crate::{
    geometry::{point::Point, spatial_element::SpatialElement},
    mesh::basic_types::Mesh,
    numeric::scalar::Scalar,
};

fn bad_data(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, format!("OFF: {}", msg))
}

/// Write a mesh to ASCII OFF:
///   OFF
///   <numVertices> <numFaces> <numEdges>
///   x y z
///   ...
///   3 i j k   (zero-based indices)
pub fn write_off<T: Scalar, P: AsRef<Path>>(mesh: &Mesh<T, 3>, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "OFF")?;
    writeln!(out, "{} {} {}", mesh.num_vertices(), mesh.num_faces(), 0)?;

    for v in &mesh.vertices {
        let c = v.position.coords();
        writeln!(
            out,
            "{} {} {}",
            c[0].to_f64().unwrap_or(0.0),
            c[1].to_f64().unwrap_or(0.0),
            c[2].to_f64().unwrap_or(0.0)
        )?;
    }

    for f in 0..mesh.num_faces() {
        let vs = mesh.face_vertices(f);
        writeln!(out, "3 {} {} {}", vs[0], vs[1], vs[2])?;
    }

    out.flush()
}

/// Read a mesh from ASCII OFF. Comments (`#`) are tolerated; only
/// triangular faces are kept.
pub fn read_off<T: Scalar, P: AsRef<Path>>(path: P) -> io::Result<Mesh<T, 3>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut toks = Vec::new();
    for line in reader.lines() {
        let l = line?;
        let trimmed = l.split('#').next().unwrap_or("").trim();
        if trimmed.is_empty() {
            continue;
        }
        toks.extend(trimmed.split_whitespace().map(|s| s.to_string()));
    }

    let mut it = toks.into_iter();

    let header = it.next().ok_or_else(|| bad_data("missing header"))?;
    if header != "OFF" {
        return Err(bad_data("expected 'OFF' header"));
    }

    let mut next_count = |what: &str| -> io::Result<usize> {
        it.next()
            .ok_or_else(|| bad_data(&format!("missing {} count", what)))?
            .parse()
            .map_err(|_| bad_data(&format!("bad {} count", what)))
    };
    let vcount = next_count("vertex")?;
    let fcount = next_count("face")?;
    let _ecount = next_count("edge")?;

    let mut coord = |axis: &str| -> io::Result<f64> {
        it.next()
            .ok_or_else(|| bad_data(&format!("incomplete vertex ({})", axis)))?
            .parse()
            .map_err(|_| bad_data(&format!("bad vertex {}", axis)))
    };

    let mut mesh = Mesh::new();
    for _ in 0..vcount {
        let x = coord("x")?;
        let y = coord("y")?;
        let z = coord("z")?;
        mesh.add_vertex(Point::<T, 3>::from_vals([x, y, z]));
    }

    let mut index = |what: &str| -> io::Result<usize> {
        it.next()
            .ok_or_else(|| bad_data(&format!("face missing {}", what)))?
            .parse()
            .map_err(|_| bad_data(&format!("bad face {}", what)))
    };

    for _ in 0..fcount {
        let poly_size = index("vertex count")?;
        if poly_size == 3 {
            let a = index("index a")?;
            let b = index("index b")?;
            let c = index("index c")?;
            if a >= vcount || b >= vcount || c >= vcount {
                return Err(bad_data("face index out of range"));
            }
            mesh.add_triangle(a, b, c);
        } else {
            for _ in 0..poly_size {
                let _ = index("index")?;
            }
        }
    }

    mesh.build_boundary_loops();
    Ok(mesh)
}
