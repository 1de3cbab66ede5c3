pub type NodeId = usize;
pub type ArcId = usize;
pub type RoadInformationId = usize;
