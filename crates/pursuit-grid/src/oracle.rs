use std::collections::VecDeque;

use pursuit_core::{Direction, Position, WallMap};

/// Precomputed all-pairs maze distances over the open cells of a wall map.
///
/// Stand-in for the host engine's distance oracle: exact, symmetric, and
/// `u32::MAX` for anything unreachable (walls and out-of-bounds included).
#[derive(Debug, Clone)]
pub struct MazeDistances {
    width: i32,
    height: i32,
    /// Dense open-cell index per grid cell, `None` for walls.
    open_idx: Vec<Option<u32>>,
    open_count: usize,
    /// Row-major `open_count * open_count` distance table.
    table: Vec<u32>,
}

impl MazeDistances {
    pub fn new(walls: &WallMap) -> Self {
        let width = walls.width();
        let height = walls.height();
        let cells = (width * height) as usize;

        let mut open_idx: Vec<Option<u32>> = vec![None; cells];
        let mut open_cells: Vec<Position> = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if !walls.is_wall(x, y) {
                    open_idx[(y * width + x) as usize] = Some(open_cells.len() as u32);
                    open_cells.push(Position::new(x, y));
                }
            }
        }

        let open_count = open_cells.len();
        let mut table = vec![u32::MAX; open_count * open_count];
        let mut queue = VecDeque::new();

        for (source, &start) in open_cells.iter().enumerate() {
            let row = &mut table[source * open_count..(source + 1) * open_count];
            row[source] = 0;
            queue.clear();
            queue.push_back(start);

            while let Some(pos) = queue.pop_front() {
                let here = open_idx[(pos.y * width + pos.x) as usize]
                    .expect("BFS frontier holds open cells only");
                let next_dist = row[here as usize] + 1;

                // Fixed order for determinism: N, E, S, W.
                for dir in Direction::CARDINAL {
                    let n = pos.step(dir);
                    if walls.is_wall(n.x, n.y) {
                        continue;
                    }
                    let idx = open_idx[(n.y * width + n.x) as usize]
                        .expect("non-wall cell is indexed") as usize;
                    if row[idx] != u32::MAX {
                        continue;
                    }
                    row[idx] = next_dist;
                    queue.push_back(n);
                }
            }
        }

        Self {
            width,
            height,
            open_idx,
            open_count,
            table,
        }
    }

    pub fn distance(&self, a: Position, b: Position) -> u32 {
        let (Some(ia), Some(ib)) = (self.idx(a), self.idx(b)) else {
            return u32::MAX;
        };
        self.table[ia * self.open_count + ib]
    }

    fn idx(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        self.open_idx[(pos.y * self.width + pos.x) as usize].map(|i| i as usize)
    }
}
