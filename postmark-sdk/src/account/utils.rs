use serde::Serialize;

pub(crate) const DEFAULT_COUNT: u32 = 100;
pub(crate) const DEFAULT_OFFSET: u32 = 0;

/// 列表接口的分页query，`count`为0或未设置时使用默认值
#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct PageQuery<'a> {
    pub count: u32,
    pub offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

impl<'a> PageQuery<'a> {
    pub(crate) fn new(count: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            count: count.filter(|c| *c != 0).unwrap_or(DEFAULT_COUNT),
            offset: offset.unwrap_or(DEFAULT_OFFSET),
            name: None,
        }
    }

    pub(crate) fn with_name(mut self, name: Option<&'a str>) -> Self {
        self.name = name;
        self
    }
}
