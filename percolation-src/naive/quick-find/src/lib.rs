pub struct QuickFind(Vec<usize>);

impl QuickFind {
    pub fn new(n: usize) -> Self { Self((0..n).collect()) }
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let (ru, rv) = (self.0[u], self.0[v]);
        if ru == rv {
            return false;
        }
        for id in &mut self.0 {
            if *id == ru {
                *id = rv;
            }
        }
        true
    }
    pub fn connected(&self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }
    pub fn find(&self, u: usize) -> usize { self.0[u] }
    pub fn count(&self, u: usize) -> usize {
        self.0.iter().filter(|&&id| id == self.0[u]).count()
    }
    pub fn component_count(&self) -> usize {
        (0..self.0.len()).filter(|&i| self.0[i] == i).count()
    }
}
