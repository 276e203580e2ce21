use serde::Serialize;

use crate::domain::category::Category;
use crate::dto::videos::VideoDto;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            description: value.description,
            icon: value.icon,
            color: value.color,
        }
    }
}

/// `{success, count, data}` listing of categories.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<CategoryDto>,
}

impl From<Vec<CategoryDto>> for CategoryListResponse {
    fn from(data: Vec<CategoryDto>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// `{success, data}` wrapper around a single category.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryResponse {
    pub success: bool,
    pub data: CategoryDto,
}

impl From<CategoryDto> for CategoryResponse {
    fn from(data: CategoryDto) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// A category together with the videos filed under it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryVideosResponse {
    pub success: bool,
    pub category: CategoryDto,
    pub videos: Vec<VideoDto>,
    pub count: usize,
}

impl CategoryVideosResponse {
    pub fn new(category: CategoryDto, videos: Vec<VideoDto>) -> Self {
        Self {
            success: true,
            category,
            count: videos.len(),
            videos,
        }
    }
}
