use std::collections::VecDeque;

/// Sites reachable through open sites from an open site in `start_row`.
pub fn reach_from_row(open: &[Vec<bool>], start_row: usize) -> Vec<Vec<bool>> {
    let n = open.len();
    let mut seen = vec![vec![false; n]; n];
    let mut queue = VecDeque::new();
    for j in 0..n {
        if open[start_row][j] {
            seen[start_row][j] = true;
            queue.push_back((start_row, j));
        }
    }
    while let Some((i, j)) = queue.pop_front() {
        let nbd = [
            (i.wrapping_sub(1), j),
            (i + 1, j),
            (i, j.wrapping_sub(1)),
            (i, j + 1),
        ];
        for (ni, nj) in nbd {
            if ni < n && nj < n && open[ni][nj] && !seen[ni][nj] {
                seen[ni][nj] = true;
                queue.push_back((ni, nj));
            }
        }
    }
    seen
}

pub fn percolates(open: &[Vec<bool>]) -> bool {
    let n = open.len();
    n > 0 && reach_from_row(open, 0)[n - 1].iter().any(|&b| b)
}

#[test]
fn sanity_check() {
    let open = vec![
        vec![true, false, false],
        vec![true, true, false],
        vec![false, true, true],
    ];
    let top = reach_from_row(&open, 0);
    assert!(top[2][2]);
    assert!(!top[0][1]);
    assert!(percolates(&open));

    let open = vec![vec![false, true, false]; 2]
        .into_iter()
        .chain([vec![true, false, false]])
        .collect::<Vec<_>>();
    assert!(!percolates(&open));
    assert!(reach_from_row(&open, 2)[2][0]);
    assert!(!reach_from_row(&open, 2)[1][1]);
}
